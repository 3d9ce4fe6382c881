//! Dirty-region tracking
//!
//! Each screen region has one bit. Setting a bit means the region's
//! on-terminal content is stale; the renderer clears it after repainting.

/// Independently repainted screen regions, in repaint order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    /// Cleared screen plus outer border
    Background,
    /// Menu and inner-screen frames
    MenuFrame,
    /// Menu buttons and the selected screen's content
    MenuChoice,
    /// Per-screen incremental updates
    MenuScreen,
}

impl Region {
    /// All regions in the order they must be repainted
    pub const ALL: [Region; 4] = [
        Region::Background,
        Region::MenuFrame,
        Region::MenuChoice,
        Region::MenuScreen,
    ];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtySet(u8);

impl DirtySet {
    /// No region dirty
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every region dirty
    pub const fn all() -> Self {
        Self(0x0F)
    }

    pub fn mark_dirty(&mut self, region: Region) {
        self.0 |= region.bit();
    }

    pub fn mark_all(&mut self) {
        *self = Self::all();
    }

    pub fn clear(&mut self, region: Region) {
        self.0 &= !region.bit();
    }

    pub fn is_dirty(&self, region: Region) -> bool {
        self.0 & region.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Take the current set, leaving nothing dirty
    pub fn drain_dirty(&mut self) -> DirtySet {
        core::mem::take(self)
    }

    /// Dirty regions in repaint order
    pub fn iter(&self) -> impl Iterator<Item = Region> {
        let set = *self;
        Region::ALL.into_iter().filter(move |r| set.is_dirty(*r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_clear() {
        let mut set = DirtySet::empty();
        assert!(set.is_empty());

        set.mark_dirty(Region::MenuChoice);
        assert!(set.is_dirty(Region::MenuChoice));
        assert!(!set.is_dirty(Region::Background));

        set.clear(Region::MenuChoice);
        assert!(set.is_empty());
    }

    #[test]
    fn test_mark_all() {
        let mut set = DirtySet::empty();
        set.mark_all();
        for region in Region::ALL {
            assert!(set.is_dirty(region));
        }
        assert_eq!(set, DirtySet::all());
    }

    #[test]
    fn test_drain() {
        let mut set = DirtySet::empty();
        set.mark_dirty(Region::Background);
        set.mark_dirty(Region::MenuScreen);

        let drained = set.drain_dirty();
        assert!(set.is_empty());
        assert!(drained.is_dirty(Region::Background));
        assert!(drained.is_dirty(Region::MenuScreen));
        assert!(!drained.is_dirty(Region::MenuFrame));
    }

    #[test]
    fn test_iter_in_repaint_order() {
        let mut set = DirtySet::empty();
        set.mark_dirty(Region::MenuScreen);
        set.mark_dirty(Region::Background);
        set.mark_dirty(Region::MenuChoice);

        let mut order = set.iter();
        assert_eq!(order.next(), Some(Region::Background));
        assert_eq!(order.next(), Some(Region::MenuChoice));
        assert_eq!(order.next(), Some(Region::MenuScreen));
        assert_eq!(order.next(), None);
    }
}
