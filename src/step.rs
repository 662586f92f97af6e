/// Outcome of one pull: either an intermediate element or completion.
///
/// A sequence step is `Step<T, Option<T>>`. `Complete(None)` is plain
/// completion and `Complete(Some(v))` is completion carrying one last
/// element, the *terminal value*.
///
/// # Examples
///
/// ```rust
/// use seqgen::Step;
///
/// let element: Step<i32, Option<i32>> = Step::Yielded(42);
/// let last: Step<i32, Option<i32>> = Step::Complete(Some(7));
///
/// assert_eq!(element.map_yielded(|x| x * 2), Step::Yielded(84));
/// assert_eq!(last.into_value(), Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// An element was produced; the producer may be pulled again.
    Yielded(Y),
    /// The producer is finished.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts from `Step<Y, D>` to `Option<Y>`, discarding a complete value.
    ///
    /// ```rust
    /// use seqgen::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert_eq!(x.yielded_value(), Some(42));
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts from `Step<Y, D>` to `Option<D>`, discarding a yielded value.
    #[inline]
    pub fn complete_value(self) -> Option<D> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(d) => Some(d),
        }
    }

    /// Maps the yielded value, leaving a complete value untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Maps the complete value, leaving a yielded value untouched.
    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    /// Returns the contained `Yielded` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Complete`.
    ///
    /// ```should_panic
    /// use seqgen::Step;
    ///
    /// let x: Step<i32, &str> = Step::Complete("done");
    /// x.unwrap_yielded(); // panics
    /// ```
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    /// Returns the contained `Complete` value.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Yielded`.
    #[inline]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}

impl<T> Step<T, Option<T>> {
    /// The element carried by this step, whether yielded or terminal.
    ///
    /// ```rust
    /// use seqgen::Step;
    ///
    /// assert_eq!(Step::<i32, Option<i32>>::Yielded(1).into_value(), Some(1));
    /// assert_eq!(Step::<i32, Option<i32>>::Complete(Some(2)).into_value(), Some(2));
    /// assert_eq!(Step::<i32, Option<i32>>::Complete(None).into_value(), None);
    /// ```
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Step::Yielded(v) | Step::Complete(Some(v)) => Some(v),
            Step::Complete(None) => None,
        }
    }

    /// Returns `true` for plain completion, without a terminal value.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Step::Complete(None))
    }
}
