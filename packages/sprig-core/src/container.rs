use crate::error::ShapeError;
use crate::key::KeyEvent;
use crate::node::{Drawable, IntoPosition, Node, impl_node_access};
use crate::scene::DisplayList;
use slotmap::{SecondaryMap, SlotMap, new_key_type};
use std::sync::atomic::{AtomicU64, Ordering};

new_key_type! {
    struct Slot;
}

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

/// Handle to a child, returned by [`Container::add`].
///
/// Only the container that issued it resolves it; any other container
/// treats it as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildId {
    owner: u64,
    slot: Slot,
}

/// A drawable that owns an ordered list of drawables, nested containers
/// included, and forwards draw and key calls to them in insertion order.
///
/// Children keep absolute positions; the container's own position does not
/// offset them.
#[derive(Debug)]
pub struct Container {
    node: Node,
    owner: u64,
    children: SlotMap<Slot, Box<dyn Drawable>>,
    order: Vec<ChildId>,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            node: Node::default(),
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            children: SlotMap::with_key(),
            order: Vec::new(),
        }
    }
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(position: impl IntoPosition) -> Result<Self, ShapeError> {
        Ok(Self {
            node: Node::new(position)?,
            ..Self::default()
        })
    }

    pub fn add(&mut self, child: Box<dyn Drawable>) -> ChildId {
        let position = child.position();
        let id = ChildId {
            owner: self.owner,
            slot: self.children.insert(child),
        };
        self.order.push(id);
        tracing::info!(
            "Added object at position {}. Total objects: {}",
            position,
            self.order.len()
        );
        id
    }

    /// Convenience for `add(Box::new(child))`.
    pub fn push<D: Drawable>(&mut self, child: D) -> ChildId {
        self.add(Box::new(child))
    }

    /// Detaches and returns the child. An unknown id only logs a warning.
    pub fn remove(&mut self, id: ChildId) -> Option<Box<dyn Drawable>> {
        let Some(child) = self.slot(id).and_then(|slot| self.children.remove(slot)) else {
            tracing::warn!("Attempted to remove an object that is not in the container.");
            return None;
        };
        self.order.retain(|&other| other != id);
        tracing::info!(
            "Removed object from position {}. Total objects: {}",
            child.position(),
            self.order.len()
        );
        Some(child)
    }

    pub fn clear(&mut self) {
        let count = self.order.len();
        self.children.clear();
        self.order.clear();
        tracing::info!("Cleared all objects from the container. Removed {} objects.", count);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn slot(&self, id: ChildId) -> Option<Slot> {
        (id.owner == self.owner).then_some(id.slot)
    }

    pub fn contains(&self, id: ChildId) -> bool {
        self.slot(id).is_some_and(|slot| self.children.contains_key(slot))
    }

    /// Child ids in insertion order.
    pub fn ids(&self) -> &[ChildId] {
        &self.order
    }

    pub fn get(&self, id: ChildId) -> Option<&dyn Drawable> {
        let slot = self.slot(id)?;
        self.children.get(slot).map(|child| child.as_ref())
    }

    pub fn get_mut(&mut self, id: ChildId) -> Option<&mut (dyn Drawable + 'static)> {
        let slot = self.slot(id)?;
        self.children.get_mut(slot).map(|child| child.as_mut())
    }

    pub fn downcast_ref<T: Drawable>(&self, id: ChildId) -> Option<&T> {
        self.get(id)?.as_any().downcast_ref()
    }

    pub fn downcast_mut<T: Drawable>(&mut self, id: ChildId) -> Option<&mut T> {
        self.get_mut(id)?.as_any_mut().downcast_mut()
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &dyn Drawable> + '_ {
        self.order.iter().map(|id| self.children[id.slot].as_ref())
    }

    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Drawable>> + '_ {
        let mut slots: SecondaryMap<Slot, &mut Box<dyn Drawable>> =
            self.children.iter_mut().collect();
        self.order.iter().filter_map(move |id| slots.remove(id.slot))
    }
}

impl Drawable for Container {
    impl_node_access!();

    fn render(&self, list: &mut DisplayList) {
        for child in self.children() {
            child.draw(list);
        }
    }

    /// Children are drawn by their own visibility; the container's flag
    /// does not gate them.
    fn draw(&self, list: &mut DisplayList) {
        self.render(list);
    }

    fn handle_key_event(&mut self, event: &KeyEvent) {
        for id in &self.order {
            if let Some(child) = self.children.get_mut(id.slot) {
                child.handle_key_event(event);
            }
        }
    }

    /// Applies to the children held right now; later additions keep their
    /// own visibility.
    fn set_visible(&mut self, visible: bool) {
        self.node.set_visible(visible);
        for id in &self.order {
            if let Some(child) = self.children.get_mut(id.slot) {
                child.set_visible(visible);
            }
        }
    }

    /// Flips only the container's own flag.
    fn toggle_visibility(&mut self) {
        let visible = !self.node.is_visible();
        self.node.set_visible(visible);
    }
}
