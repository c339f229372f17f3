/// This trait annotates any value with the method `then`, so chained function calls become more readable
pub trait FnExt {
    fn then<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
        Self: Sized,
    {
        f(self)
    }
}

impl<T> FnExt for T {}

#[cfg(test)]
mod tests {
    use super::FnExt;

    #[test]
    fn then_applies_function() {
        assert_eq!("value".then(str::len), 5);
        assert!(Some(1).then(|option| option.is_some()));
    }
}
