//! Checks generated Sprig source against what the front end produced from it.
//!
//! A property test builds an input value (an identifier, a token, an expression or a whole
//! program), prints it as Sprig source with `Display`, scans or parses that source and then calls
//! [`Input::assert`] with the resulting token or syntax tree node. The impls below lift that check
//! over the containers the syntax tree uses: boxed operands, optional parts such as an `else`
//! branch or an initializer, and lists such as parameters, arguments and statements.

use proptest::test_runner::{TestCaseError, TestCaseResult};

/// An input that knows which front-end output it should have turned into.
pub trait Input<Output> {
    /// Checks that `output` is what the front end should have produced from this input.
    ///
    /// # Errors
    /// [`TestCaseError`]: describes the first mismatch found.
    fn assert(self, output: Output) -> TestCaseResult;
}

// operands of binary and unary nodes
impl<T, U> Input<&Box<T>> for &Box<U>
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &Box<T>) -> TestCaseResult { self.as_ref().assert(output.as_ref()) }
}

impl<T, U> Input<Option<T>> for Option<U>
where
    U: Input<T>,
{
    fn assert(self, output: Option<T>) -> TestCaseResult {
        match (self, output) {
            (Some(input), Some(output)) => input.assert(output),
            (None, None) => Ok(()),
            (Some(_), None) => Err(TestCaseError::fail("the part was generated but not parsed")),
            (None, Some(_)) => Err(TestCaseError::fail("the part was parsed but not generated")),
        }
    }
}

impl<T, U> Input<&[T]> for &[U]
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &[T]) -> TestCaseResult {
        if self.len() != output.len() {
            return Err(TestCaseError::fail(format!(
                "generated {} elements but parsed {}",
                self.len(),
                output.len()
            )));
        }

        for (input, output) in self.iter().zip(output) {
            input.assert(output)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::{prop_assert_eq, test_runner::TestCaseResult};

    use super::Input;

    /// A generated number literal, compared with the parsed value.
    struct Literal(i64);

    impl Input<&i64> for &Literal {
        fn assert(self, output: &i64) -> TestCaseResult {
            prop_assert_eq!(self.0, *output);
            Ok(())
        }
    }

    #[test]
    fn lists_compare_element_wise() {
        let inputs = [Literal(1), Literal(2)];

        assert!(inputs.as_slice().assert([1_i64, 2].as_slice()).is_ok());
        assert!(inputs.as_slice().assert([1_i64, 3].as_slice()).is_err());

        let error = inputs.as_slice().assert([1_i64].as_slice()).unwrap_err();
        assert!(error.to_string().contains("generated 2 elements but parsed 1"));
    }

    #[test]
    fn optional_parts_must_agree() {
        assert!(Some(&Literal(4)).assert(Some(&4_i64)).is_ok());
        assert!(Option::<&Literal>::None.assert(None::<&i64>).is_ok());
        assert!(Some(&Literal(4)).assert(None::<&i64>).is_err());
        assert!(Option::<&Literal>::None.assert(Some(&4_i64)).is_err());
    }

    #[test]
    fn boxed_operands_compare_their_contents() {
        assert!((&Box::new(Literal(7))).assert(&Box::new(7_i64)).is_ok());
        assert!((&Box::new(Literal(7))).assert(&Box::new(8_i64)).is_err());
    }
}
