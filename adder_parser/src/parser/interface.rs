use crate::parser::ErrorContext;

/// The output streams of a program.
///
/// [`ConsoleInterface`] writes to stdout/stderr.
/// Substitute another implementation to capture the output (ex: for testing).
pub trait UserInterface {
    /// Write a message to the regular output (stdout).
    fn print(&self, message: String);

    /// Write an error message to the error output (stderr).
    fn print_error(&self, message: String);

    /// Write the context of an error to the error output (stderr).
    fn print_error_context(&self, error_context: ErrorContext);
}

impl<T: UserInterface + ?Sized> UserInterface for &T {
    fn print(&self, message: String) {
        (**self).print(message);
    }

    fn print_error(&self, message: String) {
        (**self).print_error(message);
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        (**self).print_error_context(error_context);
    }
}

/// The [`UserInterface`] of the console.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

#[cfg(any(test, feature = "unit_test"))]
pub mod util {
    //! *Available using 'unit_test' crate feature only.*
    use crate::parser::{ErrorContext, UserInterface};
    use std::cell::RefCell;

    /// A [`UserInterface`] which records the output in memory.
    ///
    /// ### Example
    /// ```
    /// use adder_parser::{InMemoryInterface, UserInterface};
    ///
    /// let interface = InMemoryInterface::default();
    /// interface.print("1".to_string());
    /// interface.print("2".to_string());
    ///
    /// assert_eq!(interface.consume_message(), "1\n2");
    /// ```
    #[derive(Debug, Default)]
    pub struct InMemoryInterface {
        message: RefCell<Option<Vec<String>>>,
        error: RefCell<Option<Vec<String>>>,
        error_context: RefCell<Option<ErrorContext>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            self.message
                .borrow_mut()
                .get_or_insert_with(Vec::default)
                .push(message);
        }

        fn print_error(&self, message: String) {
            self.error
                .borrow_mut()
                .get_or_insert_with(Vec::default)
                .push(message);
        }

        fn print_error_context(&self, error_context: ErrorContext) {
            // Assumes print_error_context() is only ever called once.
            self.error_context.borrow_mut().replace(error_context);
        }
    }

    impl InMemoryInterface {
        /// Take the recorded (message, error, error context), leaving this interface empty.
        pub fn consume(&self) -> (Option<String>, Option<String>, Option<ErrorContext>) {
            (
                self.message.take().map(|messages| messages.join("\n")),
                self.error.take().map(|errors| errors.join("\n")),
                self.error_context.take(),
            )
        }

        /// Take the recorded message, asserting that no error was recorded.
        pub fn consume_message(&self) -> String {
            let (message, error, error_context) = self.consume();
            assert_eq!(error, None);
            assert_eq!(error_context, None);
            message.expect("no message was printed")
        }
    }
}
