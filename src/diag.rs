//! Diagnostic sink.
//!
//! Every report carries the location of the user call that triggered it. Reports go to `log`
//! and/or `defmt` depending on the enabled features, and are dropped otherwise.

use core::panic::Location;

/// Reports a tolerated misuse; the caller goes on with an unchanged list.
#[track_caller]
#[cfg_attr(not(any(feature = "log", feature = "defmt")), allow(unused_variables))]
pub(crate) fn warn(message: &'static str) {
    let location = Location::caller();

    #[cfg(feature = "log")]
    log::warn!("{}:{}: {}", location.file(), location.line(), message);

    #[cfg(feature = "defmt")]
    defmt::warn!(
        "{=str}:{=u32}: {=str}",
        location.file(),
        location.line(),
        message
    );
}

/// Reports a contract violation and terminates the caller.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn contract_violation(message: &'static str) -> ! {
    #[cfg(any(feature = "log", feature = "defmt"))]
    let location = Location::caller();

    #[cfg(feature = "log")]
    log::error!("{}:{}: {}", location.file(), location.line(), message);

    #[cfg(feature = "defmt")]
    defmt::error!(
        "{=str}:{=u32}: {=str}",
        location.file(),
        location.line(),
        message
    );

    panic!("{}", message)
}

#[cfg(all(test, feature = "log"))]
mod tests {
    use std::format;
    use std::panic::{self, AssertUnwindSafe};
    use std::string::{String, ToString};
    use std::sync::Mutex;
    use std::vec::Vec;

    use log::{Level, LevelFilter, Log, Metadata, Record};

    use crate::ForwardList;

    struct Capture(Mutex<Vec<(Level, String)>>);

    impl Log for Capture {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            self.0
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static CAPTURE: Capture = Capture(Mutex::new(Vec::new()));

    fn captured(level: Level, expected: &str) -> bool {
        CAPTURE
            .0
            .lock()
            .unwrap()
            .iter()
            .any(|(l, message)| *l == level && message == expected)
    }

    #[test]
    fn reports_carry_the_caller_location() {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Warn);

        let mut full: ForwardList<u32, 1> = ForwardList::new();
        full.push_front(1).unwrap();

        let (pushed, line) = (full.push_front(2), line!());
        assert_eq!(pushed, Err(2));
        let expected = format!("{}:{}: capacity exhausted", file!(), line);
        assert!(captured(Level::Warn, &expected));

        let (_, line) = (full.erase_after(full.end()), line!());
        let expected = format!("{}:{}: cursor is end(), nothing follows it", file!(), line);
        assert!(captured(Level::Warn, &expected));

        let mut pos = full.cend();
        let (_, line) = (full.advance(&mut pos), line!());
        let expected = format!("{}:{}: cursor is end() and can't be advanced", file!(), line);
        assert!(captured(Level::Warn, &expected));

        let empty: ForwardList<u32, 1> = ForwardList::new();
        let (result, line) = (panic::catch_unwind(AssertUnwindSafe(|| *empty.front())), line!());
        assert!(result.is_err());
        let expected = format!("{}:{}: front() called on an empty list", file!(), line);
        assert!(captured(Level::Error, &expected));
    }
}
