//! Defmt implementations for the list types

use crate::{
    forward_list::{ForwardListInner, ForwardListStorage},
    CapacityError, LenType,
};
use defmt::Formatter;

impl<T, Idx, S> defmt::Format for ForwardListInner<T, Idx, S>
where
    T: defmt::Format,
    Idx: LenType,
    S: ForwardListStorage<T, Idx> + ?Sized,
{
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(fmt, "[");
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                defmt::write!(fmt, ", ");
            }
            defmt::write!(fmt, "{}", value);
        }
        defmt::write!(fmt, "]");
    }
}

impl defmt::Format for CapacityError {
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(fmt, "insufficient capacity");
    }
}
