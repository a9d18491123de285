use std::rc::Rc;

/// Invoked with the index of an activated indicator.
pub type IndicatorHandler = Rc<dyn Fn(usize)>;

/// One pagination indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Full indicator set for `total` slides with `current` active.
pub fn dots(total: usize, current: usize) -> Vec<Dot> {
    (0..total)
        .map(|index| Dot {
            index,
            active: index == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_dot_is_active() {
        let set = dots(3, 1);
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().filter(|dot| dot.active).count(), 1);
        assert!(set[1].active);
    }

    #[test]
    fn empty_when_no_slides() {
        assert!(dots(0, 0).is_empty());
    }
}
