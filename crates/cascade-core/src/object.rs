//! Object model for Cascade.
//!
//! Provides the base object system with:
//! - Unique object identifiers via arena-based storage
//! - Parent-child ownership relationships with automatic drop cascade
//! - Object naming and lookup
//! - Sibling ordering (z-order) within a parent
//!
//! Widgets register themselves here on construction; re-parenting an object
//! is how a widget is attached to or detached from the visible tree.
//!
//! # Key Types
//!
//! - [`Object`] - Base trait that all objects implement
//! - [`ObjectBase`] - Helper struct for implementing [`Object`]
//! - [`ObjectId`] - Unique stable identifier for each object
//! - [`ObjectRegistry`] - Central registry managing all objects
//! - [`SharedObjectRegistry`] - Thread-safe wrapper around [`ObjectRegistry`]

use std::any::{Any, TypeId};
use std::fmt;

use parking_lot::{Mutex, RwLock};
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for an object in the registry.
    ///
    /// `ObjectId`s are stable handles that remain valid even as the object
    /// tree changes. They become invalid when the object is destroyed.
    pub struct ObjectId;
}

/// Errors that can occur during object operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The object ID is invalid or has been destroyed.
    InvalidObjectId,
    /// Attempted to set an object as its own parent/ancestor.
    CircularParentage,
    /// The object registry is not initialized.
    RegistryNotInitialized,
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidObjectId => write!(f, "Invalid or destroyed object ID"),
            Self::CircularParentage => {
                write!(f, "Cannot set an object as its own parent or ancestor")
            }
            Self::RegistryNotInitialized => write!(f, "Object registry not initialized"),
        }
    }
}

impl std::error::Error for ObjectError {}

/// Result type for object operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

/// Internal data stored in the registry for each object.
struct ObjectData {
    /// Human-readable name for debugging and lookup.
    name: String,
    /// The type ID of the concrete Object implementation.
    type_id: TypeId,
    /// The type name for debugging.
    type_name: &'static str,
    /// Parent object (if any).
    parent: Option<ObjectId>,
    /// Child objects, back-to-front.
    children: Vec<ObjectId>,
}

impl ObjectData {
    fn new(type_id: TypeId, type_name: &'static str) -> Self {
        Self {
            name: String::new(),
            type_id,
            type_name,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// The central registry that manages all objects and their relationships.
///
/// Uses arena-based storage via SlotMap for stable object IDs and efficient
/// parent-child relationship management. Children are kept in stacking order:
/// index 0 is the back/bottom, higher indices are front/top.
pub struct ObjectRegistry {
    objects: SlotMap<ObjectId, ObjectData>,
}

impl ObjectRegistry {
    /// Create a new empty object registry.
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Register a new object and return its ID.
    pub fn register<T: Object + 'static>(&mut self) -> ObjectId {
        let data = ObjectData::new(TypeId::of::<T>(), std::any::type_name::<T>());
        let id = self.objects.insert(data);
        tracing::trace!(target: "cascade_core::object", ?id, type_name = std::any::type_name::<T>(), "registered object");
        id
    }

    /// Remove an object and all its children from the registry.
    ///
    /// Destroying a parent also destroys all of its descendants.
    pub fn destroy(&mut self, id: ObjectId) -> ObjectResult<()> {
        let descendants = self.collect_descendants(id)?;
        tracing::trace!(target: "cascade_core::object", ?id, descendant_count = descendants.len(), "destroying object tree");

        let parent = self.objects.get(id).and_then(|data| data.parent);
        if let Some(parent_id) = parent
            && let Some(parent_data) = self.objects.get_mut(parent_id)
        {
            parent_data.children.retain(|&child| child != id);
        }

        for child_id in descendants {
            self.objects.remove(child_id);
        }
        self.objects.remove(id);

        Ok(())
    }

    /// Collect all descendant IDs in depth-first order (children before parents).
    fn collect_descendants(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        let mut result = Vec::new();
        self.collect_descendants_recursive(id, &mut result)?;
        Ok(result)
    }

    fn collect_descendants_recursive(
        &self,
        id: ObjectId,
        result: &mut Vec<ObjectId>,
    ) -> ObjectResult<()> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        for &child_id in &data.children {
            self.collect_descendants_recursive(child_id, result)?;
            result.push(child_id);
        }
        Ok(())
    }

    /// Check if an object exists in the registry.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Set the parent of an object.
    ///
    /// This handles removing from the old parent and adding to the new parent.
    /// Passing `None` makes the object a root object. A newly attached child
    /// is placed at the front (top) of its siblings.
    pub fn set_parent(&mut self, id: ObjectId, new_parent: Option<ObjectId>) -> ObjectResult<()> {
        if !self.objects.contains_key(id) {
            return Err(ObjectError::InvalidObjectId);
        }

        if let Some(parent_id) = new_parent {
            if !self.objects.contains_key(parent_id) {
                return Err(ObjectError::InvalidObjectId);
            }
            // Reject cycles: the new parent must not be the object itself or
            // one of its descendants.
            if parent_id == id || self.is_descendant_of(parent_id, id) {
                return Err(ObjectError::CircularParentage);
            }
        }

        // Detach from the old parent.
        let old_parent = self.objects[id].parent;
        if let Some(old_id) = old_parent
            && let Some(old_data) = self.objects.get_mut(old_id)
        {
            old_data.children.retain(|&child| child != id);
        }

        // Attach to the new parent.
        self.objects[id].parent = new_parent;
        if let Some(parent_id) = new_parent {
            self.objects[parent_id].children.push(id);
        }

        Ok(())
    }

    fn is_descendant_of(&self, candidate: ObjectId, ancestor: ObjectId) -> bool {
        let mut current = self.objects.get(candidate).and_then(|d| d.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.objects.get(id).and_then(|d| d.parent);
        }
        false
    }

    /// Get the parent of an object.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.objects
            .get(id)
            .map(|d| d.parent)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the children of an object, back-to-front.
    pub fn children(&self, id: ObjectId) -> ObjectResult<&[ObjectId]> {
        self.objects
            .get(id)
            .map(|d| d.children.as_slice())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Get the name of an object.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<&str> {
        self.objects
            .get(id)
            .map(|d| d.name.as_str())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Set the name of an object.
    pub fn set_object_name(&mut self, id: ObjectId, name: String) -> ObjectResult<()> {
        let data = self.objects.get_mut(id).ok_or(ObjectError::InvalidObjectId)?;
        data.name = name;
        Ok(())
    }

    /// Get the type name of an object (for debugging).
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.objects
            .get(id)
            .map(|d| d.type_name)
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Check whether an object is of concrete type `T`.
    pub fn is_type<T: 'static>(&self, id: ObjectId) -> ObjectResult<bool> {
        self.objects
            .get(id)
            .map(|d| d.type_id == TypeId::of::<T>())
            .ok_or(ObjectError::InvalidObjectId)
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        for &child_id in &data.children {
            if let Some(child) = self.objects.get(child_id)
                && child.name == name
            {
                return Ok(Some(child_id));
            }
        }
        Ok(None)
    }

    // =========================================================================
    // Z-Order / Sibling Ordering
    // =========================================================================

    /// Get an object's index among its siblings.
    ///
    /// Index 0 is the back/bottom, higher indices are front/top.
    /// Returns `None` if the object has no parent.
    pub fn sibling_index(&self, id: ObjectId) -> ObjectResult<Option<usize>> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        let Some(parent_id) = data.parent else {
            return Ok(None);
        };
        Ok(self.objects[parent_id]
            .children
            .iter()
            .position(|&child| child == id))
    }

    /// Raise an object to the front (highest z-order among siblings).
    pub fn raise(&mut self, id: ObjectId) -> ObjectResult<()> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        let Some(parent_id) = data.parent else {
            return Ok(());
        };
        let children = &mut self.objects[parent_id].children;
        children.retain(|&child| child != id);
        children.push(id);
        Ok(())
    }

    /// Lower an object to the back (lowest z-order among siblings).
    pub fn lower(&mut self, id: ObjectId) -> ObjectResult<()> {
        let data = self.objects.get(id).ok_or(ObjectError::InvalidObjectId)?;
        let Some(parent_id) = data.parent else {
            return Ok(());
        };
        let children = &mut self.objects[parent_id].children;
        children.retain(|&child| child != id);
        children.insert(0, id);
        Ok(())
    }

    /// Get the number of live objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate over all root objects (objects with no parent).
    pub fn root_objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(id, _)| id)
    }
}

impl Default for ObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe wrapper around [`ObjectRegistry`].
pub struct SharedObjectRegistry {
    inner: RwLock<ObjectRegistry>,
}

impl SharedObjectRegistry {
    /// Create a new shared registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(ObjectRegistry::new()),
        }
    }

    /// Register a new object and return its ID.
    pub fn register<T: Object + 'static>(&self) -> ObjectId {
        self.inner.write().register::<T>()
    }

    /// Remove an object and all its children.
    pub fn destroy(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().destroy(id)
    }

    /// Check if an object exists.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.inner.read().contains(id)
    }

    /// Set the parent of an object.
    pub fn set_parent(&self, id: ObjectId, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// Get the parent of an object.
    pub fn parent(&self, id: ObjectId) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().parent(id)
    }

    /// Get the children of an object, back-to-front.
    pub fn children(&self, id: ObjectId) -> ObjectResult<Vec<ObjectId>> {
        self.inner.read().children(id).map(|c| c.to_vec())
    }

    /// Get the name of an object.
    pub fn object_name(&self, id: ObjectId) -> ObjectResult<String> {
        self.inner.read().object_name(id).map(String::from)
    }

    /// Set the name of an object.
    pub fn set_object_name(&self, id: ObjectId, name: String) -> ObjectResult<()> {
        self.inner.write().set_object_name(id, name)
    }

    /// Get the type name of an object.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.inner.read().type_name(id)
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, id: ObjectId, name: &str) -> ObjectResult<Option<ObjectId>> {
        self.inner.read().find_child_by_name(id, name)
    }

    /// Get an object's index among its siblings.
    pub fn sibling_index(&self, id: ObjectId) -> ObjectResult<Option<usize>> {
        self.inner.read().sibling_index(id)
    }

    /// Raise an object to the front among its siblings.
    pub fn raise(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().raise(id)
    }

    /// Lower an object to the back among its siblings.
    pub fn lower(&self, id: ObjectId) -> ObjectResult<()> {
        self.inner.write().lower(id)
    }

    /// Get the number of live objects.
    pub fn object_count(&self) -> usize {
        self.inner.read().object_count()
    }

    /// Get all root objects.
    pub fn root_objects(&self) -> Vec<ObjectId> {
        self.inner.read().root_objects().collect()
    }

    /// Access the registry with a read lock for complex operations.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ObjectRegistry) -> R,
    {
        f(&self.inner.read())
    }

    /// Access the registry with a write lock for complex operations.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ObjectRegistry) -> R,
    {
        f(&mut self.inner.write())
    }
}

impl Default for SharedObjectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global object registry (lazy initialized).
static GLOBAL_REGISTRY: Mutex<Option<SharedObjectRegistry>> = Mutex::new(None);

/// Initialize the global object registry.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_global_registry() {
    let mut guard = GLOBAL_REGISTRY.lock();
    if guard.is_none() {
        *guard = Some(SharedObjectRegistry::new());
    }
}

/// Get a reference to the global object registry.
///
/// Returns an error if the registry hasn't been initialized.
pub fn global_registry() -> ObjectResult<&'static SharedObjectRegistry> {
    let guard = GLOBAL_REGISTRY.lock();
    if guard.is_some() {
        // SAFETY: Once initialized, the registry is never replaced or set
        // back to None, so the reference remains valid for 'static.
        Ok(unsafe {
            let ptr = guard.as_ref().unwrap() as *const SharedObjectRegistry;
            &*ptr
        })
    } else {
        Err(ObjectError::RegistryNotInitialized)
    }
}

/// The base trait that all objects must implement.
///
/// Types implementing this trait participate in the object tree and can carry
/// signals for notification.
pub trait Object: Any + Send + Sync {
    /// Get this object's unique identifier.
    fn object_id(&self) -> ObjectId;
}

/// Helper for implementing the [`Object`] trait.
///
/// Include this as a field in your object types to handle registration and
/// provide the object ID. On construction, it automatically registers the
/// object with the [`global_registry`]; on drop, it unregisters.
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    /// Create a new ObjectBase, registering the object in the global registry.
    ///
    /// # Panics
    ///
    /// Panics if the global registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        let registry = global_registry().expect("Object registry not initialized");
        let id = registry.register::<T>();
        Self { id }
    }

    /// Get the object's ID.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Get the object's name from the registry.
    pub fn name(&self) -> String {
        global_registry()
            .and_then(|r| r.object_name(self.id))
            .unwrap_or_default()
    }

    /// Set the object's name in the registry.
    pub fn set_name(&self, name: impl Into<String>) {
        if let Ok(registry) = global_registry() {
            let _ = registry.set_object_name(self.id, name.into());
        }
    }

    /// Get the parent object ID.
    pub fn parent(&self) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.parent(self.id))
            .ok()
            .flatten()
    }

    /// Set the parent object.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        global_registry()?.set_parent(self.id, parent)
    }

    /// Get child object IDs, back-to-front.
    pub fn children(&self) -> Vec<ObjectId> {
        global_registry()
            .and_then(|r| r.children(self.id))
            .unwrap_or_default()
    }

    /// Find a direct child by name.
    pub fn find_child_by_name(&self, name: &str) -> Option<ObjectId> {
        global_registry()
            .and_then(|r| r.find_child_by_name(self.id, name))
            .ok()
            .flatten()
    }

    /// Get this object's index among its siblings.
    pub fn sibling_index(&self) -> Option<usize> {
        global_registry()
            .and_then(|r| r.sibling_index(self.id))
            .ok()
            .flatten()
    }

    /// Raise this object to the front among its siblings.
    pub fn raise(&self) -> ObjectResult<()> {
        global_registry()?.raise(self.id)
    }

    /// Lower this object to the back among its siblings.
    pub fn lower(&self) -> ObjectResult<()> {
        global_registry()?.lower(self.id)
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        // Unregister from the global registry when dropped.
        if let Ok(registry) = global_registry() {
            let _ = registry.destroy(self.id);
        }
    }
}
