use std::hint;

pub(crate) trait OptionExtension<T> {
    /// Unwraps a value which the caller knows to be [`Some`].
    ///
    /// # Safety
    /// The [`Option`] must be [`Some`]. Debug builds check this with [`unreachable!`], release
    /// builds assume it.
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    #[track_caller]
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!("internal link to a vacant slot"),
            // SAFETY: The caller guarantees that this is Some.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
