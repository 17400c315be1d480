//! Pre-condition checks run before options reach the controller.

use crate::config::CarouselOptions;
use crate::error::CarouselError;

/// Check a full option record for valid field values.
pub fn check_options(opts: &CarouselOptions) -> Result<(), CarouselError> {
    if opts.prefix.trim().is_empty() {
        return Err(CarouselError::EmptyPrefix);
    }
    if opts.items_per_slide == 0 {
        return Err(CarouselError::ZeroItemsPerSlide);
    }
    if opts.items_per_scroll == 0 {
        return Err(CarouselError::ZeroItemsPerScroll);
    }
    if opts.autoplay_speed == 0 {
        return Err(CarouselError::ZeroAutoplaySpeed);
    }
    Ok(())
}

/// Check that replacing `current` with `next` is coherent for a live
/// controller, on top of the per-field checks.
pub fn check_update(
    current: &CarouselOptions,
    next: &CarouselOptions,
) -> Result<(), CarouselError> {
    check_options(next)?;
    // The element set was discovered under the old prefix; a new prefix
    // would describe elements this instance does not hold.
    if current.prefix != next.prefix {
        return Err(CarouselError::PrefixChanged {
            from: current.prefix.clone(),
            to: next.prefix.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptionsPatch;

    #[test]
    fn default_options_pass() {
        assert!(check_options(&CarouselOptions::default()).is_ok());
    }

    #[test]
    fn rejects_out_of_domain_fields() {
        let base = CarouselOptions::default();
        let cases = [
            (
                CarouselOptions {
                    prefix: "  ".into(),
                    ..base.clone()
                },
                CarouselError::EmptyPrefix,
            ),
            (
                CarouselOptions {
                    items_per_slide: 0,
                    ..base.clone()
                },
                CarouselError::ZeroItemsPerSlide,
            ),
            (
                CarouselOptions {
                    items_per_scroll: 0,
                    ..base.clone()
                },
                CarouselError::ZeroItemsPerScroll,
            ),
            (
                CarouselOptions {
                    autoplay_speed: 0,
                    ..base.clone()
                },
                CarouselError::ZeroAutoplaySpeed,
            ),
        ];
        for (opts, expected) in cases {
            assert_eq!(check_options(&opts), Err(expected));
        }
    }

    #[test]
    fn update_rejects_prefix_change() {
        let current = CarouselOptions::default();
        let next = OptionsPatch {
            prefix: Some("gallery".into()),
            ..OptionsPatch::default()
        }
        .apply(&current);
        assert_eq!(
            check_update(&current, &next),
            Err(CarouselError::PrefixChanged {
                from: "carousel".into(),
                to: "gallery".into(),
            })
        );
    }

    #[test]
    fn update_reruns_field_checks() {
        let current = CarouselOptions::default();
        let next = CarouselOptions {
            items_per_slide: 0,
            ..current.clone()
        };
        assert_eq!(
            check_update(&current, &next),
            Err(CarouselError::ZeroItemsPerSlide)
        );
    }

    #[test]
    fn update_accepts_coherent_changes() {
        let current = CarouselOptions::default();
        let next = CarouselOptions {
            items_per_slide: 4,
            enable_autoplay: false,
            ..current.clone()
        };
        assert!(check_update(&current, &next).is_ok());
    }
}
