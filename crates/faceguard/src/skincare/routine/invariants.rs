use thiserror::Error;

use crate::skincare::domain::{Cadence, ProductCategory, Routine, RoutineStep};

/// Structural violations in a generated routine. Any of these points at a generator bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutineDefect {
    #[error("{cadence:?} step {position} has order {found}, expected {expected}")]
    StepOrder {
        cadence: Cadence,
        position: usize,
        expected: usize,
        found: u8,
    },
    #[error("{cadence:?} step {order} is filed under {found:?}")]
    CadenceMismatch {
        cadence: Cadence,
        order: u8,
        found: Cadence,
    },
    #[error("{cadence:?} step {order} has no product")]
    MissingProduct { cadence: Cadence, order: u8 },
    #[error("morning routine has {0} sunscreen steps, expected exactly one")]
    SunscreenCount(usize),
    #[error("sunscreen is not the final morning step")]
    SunscreenNotLast,
}

impl Routine {
    /// Checks that orders run 1..=n per cadence, every step names a product, and the
    /// morning cadence ends with its only sunscreen.
    pub fn validate(&self) -> Result<(), RoutineDefect> {
        for cadence in Cadence::ordered() {
            validate_cadence(cadence, self.steps(cadence))?;
        }

        let sunscreens = self
            .morning
            .iter()
            .filter(|step| step.category == ProductCategory::Sunscreen)
            .count();
        if sunscreens != 1 {
            return Err(RoutineDefect::SunscreenCount(sunscreens));
        }
        match self.morning.last() {
            Some(step) if step.category == ProductCategory::Sunscreen => Ok(()),
            _ => Err(RoutineDefect::SunscreenNotLast),
        }
    }
}

fn validate_cadence(cadence: Cadence, steps: &[RoutineStep]) -> Result<(), RoutineDefect> {
    for (index, step) in steps.iter().enumerate() {
        let expected = index + 1;
        if usize::from(step.order) != expected {
            return Err(RoutineDefect::StepOrder {
                cadence,
                position: index,
                expected,
                found: step.order,
            });
        }
        if step.cadence != cadence {
            return Err(RoutineDefect::CadenceMismatch {
                cadence,
                order: step.order,
                found: step.cadence,
            });
        }
        if step.product.name.trim().is_empty() {
            return Err(RoutineDefect::MissingProduct {
                cadence,
                order: step.order,
            });
        }
    }
    Ok(())
}
