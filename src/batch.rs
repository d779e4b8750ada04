// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Batch processing module.
//!
//! This module provides the [`BatchProcessor`] struct, which buffers image units and
//! shades each full batch in parallel.

use image::RgbImage;
use rayon::ThreadPool;
use rayon::prelude::*;

use crate::config::ShadeConfig;
use crate::error::{Result, ShadeError};
use crate::source::ShadeUnit;

/// A processor for handling batch shading.
///
/// Units are processed independently: a failing unit yields an `Err` outcome for that
/// unit alone. Outcomes are handed to the callback in the order the units were added.
///
/// # Example
///
/// ```no_run
/// use lower_body_shade::{Dataset, ShadeConfig, batch::BatchProcessor};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ShadeConfig::new().with_batch(4);
///     let mut processor = BatchProcessor::new(&config, |units, outcomes, offset| {
///         println!("Processed {} units starting at {offset}", units.len());
///     })?;
///
///     for unit in Dataset::new("dataset").units()? {
///         processor.add(unit);
///     }
///     processor.flush();
///     Ok(())
/// }
/// ```
pub struct BatchProcessor<'a, F>
where
    F: FnMut(&[ShadeUnit], Vec<Result<RgbImage>>, usize),
{
    config: &'a ShadeConfig,
    pool: Option<ThreadPool>,
    units: Vec<ShadeUnit>,
    callback: F,
    unit_count: usize,
}

impl<'a, F> BatchProcessor<'a, F>
where
    F: FnMut(&[ShadeUnit], Vec<Result<RgbImage>>, usize),
{
    /// Create a new `BatchProcessor`.
    ///
    /// # Arguments
    ///
    /// * `config` - Shading configuration; `batch_size` and `num_threads` drive batching.
    /// * `callback` - A closure receiving the units of a batch, their outcomes, and the
    ///   index of the first unit in the batch.
    ///
    /// # Errors
    ///
    /// Returns [`ShadeError::Config`] if the configuration is invalid or the thread pool
    /// cannot be built.
    pub fn new(config: &'a ShadeConfig, callback: F) -> Result<Self> {
        config.validate()?;

        let pool = if config.num_threads == 0 {
            None
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.num_threads)
                .build()
                .map_err(|e| ShadeError::Config(format!("Failed to build thread pool: {e}")))?;
            Some(pool)
        };

        Ok(Self {
            config,
            pool,
            units: Vec::with_capacity(config.batch_size),
            callback,
            unit_count: 0,
        })
    }

    /// Add a unit to the batch.
    ///
    /// If the batch becomes full, it is automatically processed.
    pub fn add(&mut self, unit: ShadeUnit) {
        self.units.push(unit);

        if self.units.len() >= self.config.batch_size {
            self.process();
        }
    }

    /// Process any remaining units in the batch.
    ///
    /// This should be called after all units have been added to ensure the last partial
    /// batch is processed.
    pub fn flush(&mut self) {
        self.process();
    }

    fn process(&mut self) {
        if self.units.is_empty() {
            return;
        }

        let outcomes = self.run_batch();
        (self.callback)(&self.units, outcomes, self.unit_count);

        self.unit_count += self.units.len();
        self.units.clear();
    }

    fn run_batch(&self) -> Vec<Result<RgbImage>> {
        let config = self.config;
        let units = &self.units;
        let run = || {
            units
                .par_iter()
                .map(|unit| unit.process(config))
                .collect::<Vec<_>>()
        };

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Dataset;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    fn missing_unit(i: usize) -> ShadeUnit {
        Dataset::new("definitely/not/here").unit_for(PathBuf::from(format!("img{i}.jpg")))
    }

    /// Test that `BatchProcessor` buffers units until `batch_size` is reached.
    #[test]
    fn test_batch_processor_buffering() {
        let config = ShadeConfig::new().with_batch(2);
        let callback_count = Rc::new(RefCell::new(0));
        let callback_count_clone = Rc::clone(&callback_count);

        let mut processor = BatchProcessor::new(&config, move |_units, _outcomes, _offset| {
            *callback_count_clone.borrow_mut() += 1;
        })
        .unwrap();

        processor.add(missing_unit(1));
        assert_eq!(*callback_count.borrow(), 0);

        processor.add(missing_unit(2));
        assert_eq!(*callback_count.borrow(), 1);

        processor.add(missing_unit(3));
        assert_eq!(*callback_count.borrow(), 1);

        processor.flush();
        assert_eq!(*callback_count.borrow(), 2);
    }

    /// Test that flush on an empty processor does nothing.
    #[test]
    fn test_batch_processor_empty_flush() {
        let config = ShadeConfig::new();
        let callback_count = Rc::new(RefCell::new(0));
        let callback_count_clone = Rc::clone(&callback_count);

        let mut processor = BatchProcessor::new(&config, move |_units, _outcomes, _offset| {
            *callback_count_clone.borrow_mut() += 1;
        })
        .unwrap();

        processor.flush();
        assert_eq!(*callback_count.borrow(), 0);
    }

    /// Failures are reported per unit, in order, and offsets accumulate.
    #[test]
    fn test_batch_processor_isolates_failures() {
        let config = ShadeConfig::new().with_batch(2).with_threads(2);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);

        let mut processor = BatchProcessor::new(&config, move |units, outcomes, offset| {
            assert_eq!(units.len(), outcomes.len());
            for (unit, outcome) in units.iter().zip(outcomes) {
                seen_clone
                    .borrow_mut()
                    .push((offset, unit.file_name(), outcome.is_err()));
            }
        })
        .unwrap();

        for i in 0..3 {
            processor.add(missing_unit(i));
        }
        processor.flush();

        let seen = seen.borrow();
        assert_eq!(
            *seen,
            vec![
                (0, "img0.jpg".to_string(), true),
                (0, "img1.jpg".to_string(), true),
                (2, "img2.jpg".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_batch_processor_rejects_zero_batch() {
        let config = ShadeConfig::new().with_batch(0);
        assert!(BatchProcessor::new(&config, |_, _, _| {}).is_err());
    }
}
