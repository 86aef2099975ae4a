//! Prediction domain - classifier seams, input validation and time source

mod classifier;
mod clock;
mod validation;

pub use classifier::{Classifier, ModelLoader};
pub use clock::{Clock, ManualClock, SystemClock};
pub use validation::{
    parse_inputs, validate_bounds, validate_field_ranges, validate_inputs, InputValidationError,
    MAX_INPUT_VALUE, MIN_INPUT_VALUE,
};

#[cfg(test)]
pub use classifier::{MockClassifier, MockModelLoader};
