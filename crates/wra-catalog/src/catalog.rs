// catalog.rs — The per-run artifact catalog.
//
// A Catalog is built once per invocation from the upstream artifact list and
// is never mutated afterwards. It keeps three views of the same data:
//
//   list      — artifacts in upstream order
//   by_name   — name index; on duplicate names the later artifact wins
//   selected  — owned copy of the first artifact matching the queried name

use std::collections::BTreeMap;

use serde::Serialize;

use crate::artifact::{Artifact, RawArtifact, RunContext};
use crate::error::{CatalogError, Result};

/// Ordered, indexed artifacts of one workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    list: Vec<Artifact>,
    by_name: BTreeMap<String, Artifact>,
    selected: Option<Artifact>,
    context: RunContext,
    queried_name: Option<String>,
}

impl Catalog {
    /// Build a catalog from the raw artifacts of a run.
    ///
    /// An empty or absent `queried_name` disables selection entirely, so an
    /// empty run is still a valid catalog. A non-empty name that matches no
    /// artifact fails with [`CatalogError::ArtifactNotFound`].
    pub fn build(
        raw: &[RawArtifact],
        context: RunContext,
        queried_name: Option<&str>,
    ) -> Result<Self> {
        let list: Vec<Artifact> = raw
            .iter()
            .map(|artifact| Artifact::from_raw(artifact, &context))
            .collect();

        let by_name = index_by_name(&list);

        let queried_name = queried_name
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let selected = match &queried_name {
            Some(name) => Some(
                list.iter()
                    .find(|artifact| &artifact.name == name)
                    .cloned()
                    .ok_or_else(|| CatalogError::ArtifactNotFound(name.clone()))?,
            ),
            None => None,
        };

        tracing::debug!(
            artifacts = list.len(),
            distinct_names = by_name.len(),
            selected = selected.as_ref().map(|a| a.id),
            "built artifact catalog"
        );

        Ok(Self {
            list,
            by_name,
            selected,
            context,
            queried_name,
        })
    }

    pub fn list(&self) -> &[Artifact] {
        &self.list
    }

    pub fn by_name(&self) -> &BTreeMap<String, Artifact> {
        &self.by_name
    }

    /// Look up an artifact by name. Duplicate names resolve to the last one listed.
    pub fn get(&self, name: &str) -> Option<&Artifact> {
        self.by_name.get(name)
    }

    pub fn selected(&self) -> Option<&Artifact> {
        self.selected.as_ref()
    }

    pub fn context(&self) -> &RunContext {
        &self.context
    }

    pub fn queried_name(&self) -> Option<&str> {
        self.queried_name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// The view of this catalog handed to template rendering.
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            artifact: self.selected.as_ref(),
            context: &self.context,
            queried_artifact_name: self.queried_name.as_deref(),
            list: &self.list,
            by_name: &self.by_name,
        }
    }
}

/// Fold the list into a name index, later entries overwriting earlier ones.
fn index_by_name(list: &[Artifact]) -> BTreeMap<String, Artifact> {
    list.iter().fold(BTreeMap::new(), |mut index, artifact| {
        index.insert(artifact.name.clone(), artifact.clone());
        index
    })
}

/// Read-only template context.
///
/// Serializes to exactly five keys: `artifact`, `context`,
/// `queriedArtifactName`, `list` and `byName`. `artifact` is left out when
/// nothing is selected so that strict templates referencing it fail.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<&'a Artifact>,
    pub context: &'a RunContext,
    pub queried_artifact_name: Option<&'a str>,
    pub list: &'a [Artifact],
    pub by_name: &'a BTreeMap<String, Artifact>,
}
