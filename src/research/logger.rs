use colored::Colorize;

use crate::{Sample, Booster, Regressor, Result};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

const DEFAULT_ROUND: usize = 100;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,TrainLoss,TestLoss,Time\n";


/// Struct `Logger` runs a boosting algorithm round by round,
/// and logs train/test loss and running time of each round
/// to the console and to a CSV file.
///
/// # Example
/// ```no_run
/// use residual_trees::prelude::*;
/// # let train: Vec<Sample> = Vec::new();
/// # let test: Vec<Sample> = Vec::new();
///
/// let booster = ResidualTrees::init(&train, BoostConfig::default())
///     .unwrap();
/// let mut logger = Logger::new(booster, absolute_loss, &train, &test)
///     .print_every(10)
///     .time_limit_as_secs(60);
/// let f = logger.run("log.csv").unwrap();
/// ```
pub struct Logger<'a, B, G> {
    booster: B,
    loss_func: G,
    train: &'a [Sample],
    test: &'a [Sample],
    time_limit: u128,
    round: usize,
}


impl<'a, B, G> Logger<'a, B, G> {
    /// Create a new instance of `Logger`.
    pub fn new(
        booster: B,
        loss_func: G,
        train: &'a [Sample],
        test: &'a [Sample],
    ) -> Self
    {
        Self {
            booster,
            loss_func,
            train,
            test,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }


    /// Returns the booster.
    pub fn booster(&self) -> &B {
        &self.booster
    }
}


impl<B, G> Logger<'_, B, G>
    where B: Booster + Regressor,
          G: Fn(&[Sample], &B) -> f64,
{
    /// Set the time limit for boosting algorithm as milliseconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit for boosting algorithm as seconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128).saturating_mul(1_000_u128);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round.max(1);
        self
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "LOSS".bold().green(),
            "LOSS".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let limit = if self.time_limit != u128::MAX {
            time_format(self.time_limit)
        } else {
            "Nothing".into()
        };
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );

        if let Some(info) = self.booster.info() {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }

        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Time Limit".bold(),
            limit.bold().green(),
            "".bold(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P) -> Result<B::Output> {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess();
        let verbose = self.round != usize::MAX;
        if verbose {
            self.print_stats();
            self.print_log_header();
        }

        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Boosting step
        for iter in 1.. {
            // Start measuring time
            let now = Instant::now();

            let flow = self.booster.boost(iter)?;

            // Stop measuring and convert `Duration` to Milliseconds.
            time_acc += now.elapsed().as_millis();

            let train = (self.loss_func)(self.train, &self.booster);
            let test = (self.loss_func)(self.test, &self.booster);

            // Write the results to `file`.
            let line = format!("{iter},{train},{test},{time_acc}\n");
            file.write_all(line.as_bytes())?;

            if time_acc > self.time_limit {
                if verbose {
                    println!(
                        "{} {}\t\t{}\t{}\t{}\n",
                        "[TLE]".bold().bright_red(),
                        format!("{:>WIDTH$}", iter).bold().red(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
                        time_format(time_acc).bold().cyan(),
                    );
                }
                break;
            }

            if verbose && iter % self.round == 0 {
                println!(
                    "{} {}\t\t{}\t{}\t{}",
                    "[LOG]".bold().magenta(),
                    format!("{:>WIDTH$}", iter).red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", train).green(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", test).yellow(),
                    time_format(time_acc).bold().cyan(),
                );
            }

            if flow.is_break() {
                if verbose {
                    println!(
                        "{} {}\t\t{}\t{}\t{}\n",
                        "[FIN]".bold().bright_green(),
                        format!("{:>WIDTH$}", iter).red(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
                        format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
                        time_format(time_acc).bold().cyan(),
                    );
                }
                break;
            }
        }

        let f = self.booster.postprocess();
        Ok(f)
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::time_format;

    #[test]
    fn formats_durations() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(3_500), " 03.500s");
        assert_eq!(time_format(125_000), " 02m 05s");
        assert_eq!(time_format(7_260_000), " 02h 01m");
    }
}
