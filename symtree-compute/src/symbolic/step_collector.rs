/// A sink for the steps an algorithm takes, such as the rewrites applied by an optimizer pass.
///
/// Passing `()` discards every step at no cost, while passing a [`Vec`] records them in order.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
