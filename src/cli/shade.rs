// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;
use std::time::Instant;

use crate::batch::BatchProcessor;
use crate::cli::args::ShadeArgs;
use crate::cli::logging::set_verbose;
use crate::config::{PHOTO_WEIGHT, ShadeConfig};
use crate::io::SaveResults;
use crate::source::Dataset;
use crate::utils::count_noun;
use crate::{VERSION, error, info, section, success, verbose, warn};

/// Shade every unit of a dataset and save the composited photos.
///
/// Exits with status 1 when the dataset cannot be listed or when every unit fails.
#[allow(clippy::cast_precision_loss)]
pub fn run_shade(args: &ShadeArgs) {
    set_verbose(args.verbose);

    let config = ShadeConfig::new()
        .with_highlight(args.color)
        .with_weights(PHOTO_WEIGHT, args.weight)
        .with_batch(args.batch)
        .with_threads(args.threads);

    if let Err(e) = config.validate() {
        error!("{e}");
        process::exit(1);
    }

    let dataset = Dataset::new(&args.input);
    let units = match dataset.units() {
        Ok(units) => units,
        Err(e) => {
            error!("Failed to list dataset {}: {e}", dataset.root().display());
            process::exit(1);
        }
    };

    if units.is_empty() {
        warn!("No images found in {}", dataset.root().display());
        return;
    }

    let total = units.len();
    section!("Lower-body shade {VERSION} 🚀 {}", count_noun(total, "image"));
    let [r, g, b] = config.highlight.0;
    verbose!(
        "highlight=({r}, {g}, {b}) weight={} batch={}",
        config.mask_weight,
        config.batch_size
    );

    let saver = SaveResults::new(&args.output);
    let mut saved = 0usize;
    let mut failed = 0usize;
    let start = Instant::now();

    {
        let processor = BatchProcessor::new(&config, |batch, outcomes, offset| {
            for (i, (unit, outcome)) in batch.iter().zip(outcomes).enumerate() {
                let position = offset + i + 1;
                let written = outcome.and_then(|shaded| saver.save(&unit.file_name(), &shaded));
                match written {
                    Ok(path) => {
                        saved += 1;
                        verbose!(
                            "image {position}/{total} {}: {}",
                            unit.image.display(),
                            path.display()
                        );
                    }
                    Err(e) => {
                        failed += 1;
                        warn!("image {position}/{total} {}: {e}", unit.image.display());
                    }
                }
            }
        });

        let mut processor = match processor {
            Ok(processor) => processor,
            Err(e) => {
                error!("{e}");
                process::exit(1);
            }
        };

        for unit in units {
            processor.add(unit);
        }
        processor.flush();
    }

    let elapsed = start.elapsed().as_secs_f64() * 1000.0;
    verbose!("Speed: {:.1}ms per image", elapsed / total as f64);

    if saved == 0 && failed > 0 {
        error!("All {} failed", count_noun(failed, "image"));
        process::exit(1);
    }

    success!(
        "{} shaded, {}",
        count_noun(saved, "image"),
        count_noun(failed, "failure")
    );
    info!("Results saved to {}", saver.save_dir().display());
}
