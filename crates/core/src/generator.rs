//! The core `Generator` trait that every noise generator must implement.
//!
//! The trait is object-safe so generators can be used as `dyn Generator` for
//! runtime switching between noise families.

use crate::error::NoiseError;
use crate::field::Field;
use serde_json::Value;

/// Core trait for scalar field generators.
///
/// A generator is constructed once with its seed and parameters, then asked
/// to produce a raw scalar [`Field`] for a given raster size. Values are in
/// ≈[-1, 1]; the rendering pipeline tone-maps them to pixels. Generation is
/// a pure function of the generator's configuration: repeated calls with the
/// same dimensions return bit-identical fields.
///
/// This trait is **object-safe**: you can use `Box<dyn Generator>` or
/// `&dyn Generator` for runtime polymorphism.
pub trait Generator {
    /// Produces the raw scalar field for a `width` x `height` raster.
    fn generate(&self, width: usize, height: usize) -> Result<Field, NoiseError>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Minimal generator used to verify trait object safety.
    struct Constant {
        level: f64,
    }

    impl Generator for Constant {
        fn generate(&self, width: usize, height: usize) -> Result<Field, NoiseError> {
            Field::filled(width, height, self.level)
        }

        fn params(&self) -> Value {
            json!({"level": self.level})
        }

        fn param_schema(&self) -> Value {
            json!({
                "level": {
                    "type": "number",
                    "default": 0.0,
                    "description": "Constant field value"
                }
            })
        }
    }

    #[test]
    fn generator_trait_is_object_safe() {
        // If the trait were not object-safe, this would fail to compile.
        let generator: Box<dyn Generator> = Box::new(Constant { level: 0.25 });
        let field = generator.generate(4, 3).unwrap();
        assert_eq!(field.width(), 4);
        assert_eq!(field.height(), 3);
    }

    #[test]
    fn generate_propagates_dimension_errors() {
        let generator = Constant { level: 0.0 };
        assert!(generator.generate(0, 8).is_err());
    }

    #[test]
    fn repeated_generation_is_identical() {
        let generator = Constant { level: -0.5 };
        let a = generator.generate(8, 8).unwrap();
        let b = generator.generate(8, 8).unwrap();
        assert!(a
            .data()
            .iter()
            .zip(b.data().iter())
            .all(|(va, vb)| va.to_bits() == vb.to_bits()));
    }

    #[test]
    fn params_reflects_configuration() {
        let generator = Constant { level: 0.25 };
        assert_eq!(generator.params()["level"], 0.25);
    }

    #[test]
    fn param_schema_has_expected_structure() {
        let generator = Constant { level: 0.0 };
        let schema = generator.param_schema();
        assert!(schema.get("level").is_some());
        assert_eq!(schema["level"]["type"], "number");
    }

    #[test]
    fn dyn_generator_reference_works() {
        let generator = Constant { level: 0.1 };
        let generator_ref: &dyn Generator = &generator;
        assert_eq!(generator_ref.generate(2, 2).unwrap().width(), 2);
    }
}
