use std::str::FromStr;

use log::LevelFilter;

use crate::{data::*, error::ArgError};

pub const USAGE: &str = "\
Usage: cashburst [OPTIONS]

Options:
  --size WxH      initial window size in pixels (default 800x600)
  --scale N       pixel scale factor, 1 to 8 (default 1)
  --fps RATE      lock the redraw rate instead of following the monitor
  --seed N        seed the random source for a reproducible show
  --fullscreen    open a borderless fullscreen window
  --headless N    run N ticks without a window and print stats
  --quiet         only print errors
  --verbose       also print debug messages
  --help          print this message";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub size: (u32, u32),
    pub scale: u8,
    pub milli_hz: Option<u32>,
    pub seed: Option<u64>,
    pub fullscreen: bool,
    pub headless: Option<u64>,
    pub log_level: LevelFilter,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE_WIN,
            scale: DEFAULT_WIN_SCALE,
            milli_hz: None,
            seed: None,
            fullscreen: false,
            headless: None,
            log_level: LevelFilter::Info,
            help: false,
        }
    }
}

fn next_value(
    args: &mut dyn Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgError> {
    args.next().ok_or(ArgError::MissingValue(flag))
}

fn parse_value<T: FromStr>(flag: &'static str, value: &str) -> Result<T, ArgError> {
    value.parse::<T>().map_err(|_| ArgError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}

impl Config {
    /// Applies command line options on top of `self`. The program name
    /// must already be skipped.
    pub fn eval_args(mut self, args: &mut dyn Iterator<Item = String>) -> Result<Self, ArgError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--size" => {
                    let value = next_value(args, "--size")?;

                    let size = value.split_once('x').and_then(|(w, h)| {
                        Some((w.parse::<u32>().ok()?, h.parse::<u32>().ok()?))
                    });

                    match size {
                        Some((w, h)) if w > 0 && h > 0 => self.size = (w, h),
                        _ => {
                            return Err(ArgError::InvalidValue {
                                flag: "--size",
                                value,
                            })
                        }
                    }
                }

                "--scale" => {
                    let scale = parse_value::<u8>("--scale", &next_value(args, "--scale")?)?;

                    if !(1..=MAX_SCALE_FACTOR).contains(&scale) {
                        return Err(ArgError::ScaleOutOfRange {
                            got: scale,
                            max: MAX_SCALE_FACTOR,
                        });
                    }

                    self.scale = scale;
                }

                "--fps" => {
                    let value = next_value(args, "--fps")?;
                    let rate = parse_value::<f32>("--fps", &value)?;
                    let milli_hz = (rate * 1000.0) as u32;

                    if !rate.is_finite() || milli_hz == 0 {
                        return Err(ArgError::InvalidValue {
                            flag: "--fps",
                            value,
                        });
                    }

                    if milli_hz > CAP_MILLI_HZ {
                        log::warn!("--fps {value} is capped to {}hz.", CAP_MILLI_HZ / 1000);
                    }

                    self.milli_hz = Some(milli_hz.min(CAP_MILLI_HZ));
                }

                "--seed" => {
                    self.seed = Some(parse_value("--seed", &next_value(args, "--seed")?)?);
                }

                "--headless" => {
                    self.headless = Some(parse_value(
                        "--headless",
                        &next_value(args, "--headless")?,
                    )?);
                }

                "--fullscreen" => self.fullscreen = true,

                "--quiet" => self.log_level = LevelFilter::Error,

                "--verbose" => self.log_level = LevelFilter::Debug,

                "--help" | "-h" => self.help = true,

                _ => return Err(ArgError::UnknownOption(arg)),
            }
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(list: &[&str]) -> Result<Config, ArgError> {
        Config::default().eval_args(&mut list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_arguments_gives_defaults() {
        assert_eq!(parse(&[]), Ok(Config::default()));
        assert_eq!(Config::default().size, (800, 600));
        assert_eq!(Config::default().scale, 1);
    }

    #[test]
    fn every_option_is_applied() {
        let config = parse(&[
            "--size",
            "1024x768",
            "--scale",
            "2",
            "--fps",
            "59.94",
            "--seed",
            "42",
            "--fullscreen",
            "--headless",
            "300",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(config.size, (1024, 768));
        assert_eq!(config.scale, 2);
        assert_eq!(config.milli_hz, Some(59_940));
        assert_eq!(config.seed, Some(42));
        assert!(config.fullscreen);
        assert_eq!(config.headless, Some(300));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(!config.help);
    }

    #[test]
    fn later_flags_win() {
        let config = parse(&["--verbose", "--quiet", "--scale", "3", "--scale", "4"]).unwrap();
        assert_eq!(config.log_level, LevelFilter::Error);
        assert_eq!(config.scale, 4);
    }

    #[test]
    fn help_is_a_flag() {
        assert!(parse(&["--help"]).unwrap().help);
        assert!(parse(&["-h"]).unwrap().help);
    }

    #[test]
    fn missing_values() {
        assert_eq!(parse(&["--size"]), Err(ArgError::MissingValue("--size")));
        assert_eq!(parse(&["--seed"]), Err(ArgError::MissingValue("--seed")));
        assert_eq!(parse(&["--headless"]), Err(ArgError::MissingValue("--headless")));
    }

    #[test]
    fn invalid_values() {
        for (flag, value) in [
            ("--size", "800"),
            ("--size", "0x600"),
            ("--size", "axb"),
            ("--scale", "big"),
            ("--fps", "0"),
            ("--fps", "inf"),
            ("--fps", "-30"),
            ("--seed", "-1"),
        ] {
            assert_eq!(
                parse(&[flag, value]),
                Err(ArgError::InvalidValue {
                    flag,
                    value: value.to_string()
                }),
                "{flag} {value}"
            );
        }
    }

    #[test]
    fn fps_is_capped() {
        assert_eq!(parse(&["--fps", "1e9"]).unwrap().milli_hz, Some(CAP_MILLI_HZ));
        assert_eq!(parse(&["--fps", "240"]).unwrap().milli_hz, Some(CAP_MILLI_HZ));
        assert_eq!(parse(&["--fps", "0.5"]).unwrap().milli_hz, Some(500));
    }

    #[test]
    fn scale_bounds() {
        assert_eq!(
            parse(&["--scale", "0"]),
            Err(ArgError::ScaleOutOfRange { got: 0, max: 8 })
        );
        assert_eq!(
            parse(&["--scale", "9"]),
            Err(ArgError::ScaleOutOfRange { got: 9, max: 8 })
        );
        assert_eq!(parse(&["--scale", "8"]).unwrap().scale, 8);
    }

    #[test]
    fn unknown_option() {
        assert_eq!(
            parse(&["--fireworks"]),
            Err(ArgError::UnknownOption("--fireworks".into()))
        );
    }
}
