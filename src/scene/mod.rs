//! Hierarchical, named container of layered geometry.
//!
//! A [`Group`] exclusively owns its leaves and child groups. Children are
//! moved in by value, so a group can only ever appear once in a tree and
//! cycles cannot be built. Flattening is a read-only pre-order walk.

use std::collections::HashSet;

use crate::error::{Result, SceneError};
use crate::geometry::Geometry;

/// Pen/colour channel a piece of geometry is drawn with.
pub type Layer = u32;

/// Separator between ancestor names in a qualified name.
pub const PATH_SEPARATOR: char = '/';

/// A named geometry entry owned by a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub layer: Layer,
    pub geometry: Geometry,
    pub name: String,
}

/// A flattened leaf: layer, geometry, and its `/`-joined ancestor path.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneEntry {
    pub layer: Layer,
    pub geometry: Geometry,
    pub qualified_name: String,
}

/// A node of the scene graph.
#[derive(Debug, Clone, Default)]
pub struct Group {
    name: String,
    leaves: Vec<Leaf>,
    children: Vec<Group>,
    used_names: HashSet<String>,
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Leaves in insertion order.
    #[must_use]
    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Child groups in insertion order.
    #[must_use]
    pub fn children(&self) -> &[Group] {
        &self.children
    }

    /// Looks up a direct child group by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Group> {
        self.children.iter().find(|g| g.name == name)
    }

    /// Appends a leaf to this group.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::DuplicateName` if a leaf or child group with the
    /// same name already exists in this group.
    pub fn add_leaf(
        &mut self,
        layer: Layer,
        geometry: impl Into<Geometry>,
        name: impl Into<String>,
    ) -> Result<()> {
        let name = self.claim(name.into())?;
        self.leaves.push(Leaf {
            layer,
            geometry: geometry.into(),
            name,
        });
        Ok(())
    }

    /// Moves `group` in as a child named `name`.
    ///
    /// # Errors
    ///
    /// Returns `SceneError::DuplicateName` if a leaf or child group with the
    /// same name already exists in this group.
    pub fn add_group(&mut self, name: impl Into<String>, mut group: Group) -> Result<()> {
        group.name = self.claim(name.into())?;
        self.children.push(group);
        Ok(())
    }

    fn claim(&mut self, name: String) -> Result<String> {
        if !self.used_names.insert(name.clone()) {
            return Err(SceneError::DuplicateName {
                parent: self.name.clone(),
                name,
            }
            .into());
        }
        Ok(name)
    }

    /// Number of leaves in this group and all descendants.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaves.len() + self.children.iter().map(Group::leaf_count).sum::<usize>()
    }

    /// Pre-order traversal: own leaves first, then each child in insertion
    /// order. Qualified names start with this group's name.
    #[must_use]
    pub fn flatten(&self) -> Vec<SceneEntry> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.flatten_into(&self.name, &mut out);
        out
    }

    fn flatten_into(&self, path: &str, out: &mut Vec<SceneEntry>) {
        out.extend(self.leaves.iter().map(|leaf| SceneEntry {
            layer: leaf.layer,
            geometry: leaf.geometry.clone(),
            qualified_name: format!("{path}{PATH_SEPARATOR}{}", leaf.name),
        }));
        for child in &self.children {
            child.flatten_into(&format!("{path}{PATH_SEPARATOR}{}", child.name), out);
        }
    }
}
