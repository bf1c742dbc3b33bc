use dbusmenu_bus::MenuCall;
use std::{collections::BTreeMap, io::Write};

/// Seconds spent in each call during one pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimingSample {
    seconds: BTreeMap<MenuCall, f64>,
}

impl TimingSample {
    /// Records the time taken by `call`, replacing any earlier value.
    pub fn record(&mut self, call: MenuCall, seconds: f64) {
        self.seconds.insert(call, seconds);
    }

    /// Seconds recorded for `call`, if any.
    pub fn get(&self, call: MenuCall) -> Option<f64> {
        self.seconds.get(&call).copied()
    }

    /// Recorded calls in pass order.
    pub fn iter(&self) -> impl Iterator<Item = (MenuCall, f64)> + '_ {
        self.seconds.iter().map(|(call, secs)| (*call, *secs))
    }
}

impl FromIterator<(MenuCall, f64)> for TimingSample {
    fn from_iter<T: IntoIterator<Item = (MenuCall, f64)>>(iter: T) -> Self {
        Self {
            seconds: iter.into_iter().collect(),
        }
    }
}

/// Running per-call totals over a number of passes.
#[derive(Clone, Debug, Default)]
pub struct CumulativeTimings {
    sums: BTreeMap<MenuCall, f64>,
    passes: u32,
}

impl CumulativeTimings {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one pass into the totals.
    pub fn add(&mut self, sample: &TimingSample) {
        for (call, seconds) in sample.iter() {
            *self.sums.entry(call).or_insert(0.0) += seconds;
        }
        self.passes += 1;
    }

    /// Number of passes folded in so far.
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// Average seconds per call. Empty when no pass has been added.
    pub fn averages(&self) -> BTreeMap<MenuCall, f64> {
        if self.passes == 0 {
            return BTreeMap::new();
        }
        let passes = f64::from(self.passes);
        self.sums
            .iter()
            .map(|(call, sum)| (*call, sum / passes))
            .collect()
    }

    /// Writes one `<name> <average-seconds>` line per call.
    pub fn write_averages(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for (call, average) in self.averages() {
            writeln!(out, "{call} {average}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample(layout: f64, children: f64, properties: f64) -> TimingSample {
        [
            (MenuCall::GetLayout, layout),
            (MenuCall::GetChildren, children),
            (MenuCall::GetProperties, properties),
        ]
        .into_iter()
        .collect()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn averages_are_sum_over_passes() {
        let mut totals = CumulativeTimings::new();
        totals.add(&sample(0.1, 1.0, 0.5));
        totals.add(&sample(0.3, 2.0, 0.5));
        totals.add(&sample(0.2, 3.0, 2.0));
        assert_eq!(totals.passes(), 3);

        let averages = totals.averages();
        assert!(close(averages[&MenuCall::GetLayout], 0.2));
        assert!(close(averages[&MenuCall::GetChildren], 2.0));
        assert!(close(averages[&MenuCall::GetProperties], 1.0));
    }

    #[test]
    fn no_passes_no_averages() {
        let totals = CumulativeTimings::new();
        assert!(totals.averages().is_empty());
        let mut out = Vec::new();
        totals.write_averages(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn report_lines_follow_call_order() {
        let mut totals = CumulativeTimings::new();
        for _ in 0..3 {
            totals.add(&sample(0.1, 0.2, 0.3));
        }
        let mut out = Vec::new();
        totals.write_averages(&mut out).unwrap();
        let report = String::from_utf8(out).unwrap();

        let lines: Vec<(&str, f64)> = report
            .lines()
            .map(|line| {
                let (name, secs) = line.split_once(' ').unwrap();
                (name, secs.parse().unwrap())
            })
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].0, "GetLayout");
        assert_eq!(lines[1].0, "GetChildren");
        assert_eq!(lines[2].0, "GetProperties");
        assert!(close(lines[0].1, 0.1));
        assert!(close(lines[1].1, 0.2));
        assert!(close(lines[2].1, 0.3));
    }

    #[test]
    fn sample_lookup() {
        let mut pass = TimingSample::default();
        pass.record(MenuCall::GetChildren, 0.25);
        assert_eq!(pass.get(MenuCall::GetChildren), Some(0.25));
        assert_eq!(pass.get(MenuCall::GetLayout), None);
    }
}
