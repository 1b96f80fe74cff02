use super::{DrawCmd, ZIndex};

/// Stable sort key for draw items: z-layer ascending (back-to-front), then
/// insertion order within the same layer.
///
/// Field order matters — the derived `Ord` compares `z` first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

/// A single recorded draw item.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey { z, order },
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn line(x: f32) -> DrawCmd {
        DrawCmd::Line(crate::scene::shapes::line::LineCmd {
            p0: Vec2::new(x, 0.0),
            p1: Vec2::new(x, 1.0),
            width: 1.0,
            color: Color::from_straight(1.0, 1.0, 1.0, 1.0),
        })
    }

    fn first_x(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Line(l) => l.p0.x,
            _ => unreachable!(),
        }
    }

    #[test]
    fn equal_z_preserves_insertion_order() {
        let mut dl = DrawList::new();
        for i in 0..4 {
            dl.push(ZIndex::new(0), line(i as f32));
        }
        let xs: Vec<f32> = dl.iter_in_paint_order().map(first_x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn lower_z_paints_first() {
        let mut dl = DrawList::new();
        dl.push(ZIndex::new(5), line(5.0));
        dl.push(ZIndex::new(-1), line(-1.0));
        dl.push(ZIndex::new(2), line(2.0));
        let xs: Vec<f32> = dl.iter_in_paint_order().map(first_x).collect();
        assert_eq!(xs, vec![-1.0, 2.0, 5.0]);
    }

    #[test]
    fn clear_resets_insertion_order() {
        let mut dl = DrawList::new();
        dl.push(ZIndex::new(0), line(0.0));
        dl.clear();
        assert!(dl.is_empty());
        dl.push(ZIndex::new(0), line(7.0));
        assert_eq!(dl.items()[0].key.order, 0);
    }
}
