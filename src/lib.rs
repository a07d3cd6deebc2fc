#![forbid(unsafe_code)]
//! mailgate_lib — validation permissive d'adresses e-mail (IDN + nouveaux TLD)
//!
//! ```
//! use mailgate_lib::validate_email;
//!
//! assert!(validate_email("user@example.technology"));
//! assert!(!validate_email("user@example.123"));
//! ```

pub mod validator;
pub use validator::{
    Acceptance,
    DEFAULT_PROBE_TLD,
    EmailAddressOracle,
    EmailError,
    EmailValidator,
    IdnNormalizer,
    IdnaNormalizer,
    Rejection,
    StrictValidator,
    ValidationReport,
    ValidatorOptions,
    check_email,
    validate_email,
};
