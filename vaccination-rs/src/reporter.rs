//! Functions in this module provide console reporting and CSV outputs about
//! campaign results

use crate::{
    campaign::Campaign,
    config::Config,
    doses::Brand,
    error::CampaignError,
    sets::{DerivedSets, SetKind},
    Identity,
};
use log::*;
use std::{
    collections::BTreeSet,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// Header of the single column in exported CSV files.
pub const CSV_HEADER: &str = "Name";

pub struct Report<'a> {
    campaign: &'a Campaign,
    sets: DerivedSets,
    limit: usize,
}

impl<'a> Report<'a> {
    /// Create report showing at most limit members of each derived set.
    pub fn new(campaign: &'a Campaign, limit: usize) -> Self {
        Report {
            campaign,
            sets: campaign.derive(),
            limit,
        }
    }

    pub fn sets(&self) -> &DerivedSets {
        &self.sets
    }

    /// Write the number of citizens in each named set.
    pub fn write_summary(&self, out: &mut impl Write) -> io::Result<()> {
        let c = self.campaign;
        let s = &self.sets;
        writeln!(out, "=== Vaccination summary (simulated) ===\n")?;
        writeln!(out, "Total citizens: {}", c.population().len())?;
        for &brand in Brand::ALL.iter() {
            writeln!(
                out,
                "Vaccinated (at least 1 dose) - {}: {}",
                brand,
                c.recipients(brand).len()
            )?;
        }
        writeln!(out, "Vaccinated (Pfizer ∪ AstraZeneca): {}", s.n_vaccinated())?;
        writeln!(out, "Not vaccinated: {}", s.n_not_vaccinated())?;
        writeln!(out, "Citizens with both doses (complete): {}", s.n_both_doses())?;
        writeln!(out, "Only Pfizer (Pfizer \\ AstraZeneca): {}", s.n_only_pfizer())?;
        writeln!(
            out,
            "Only AstraZeneca (AstraZeneca \\ Pfizer): {}",
            s.n_only_astrazeneca()
        )?;
        Ok(())
    }

    /// Write a sample of each derived set.
    pub fn write_samples(&self, out: &mut impl Write) -> io::Result<()> {
        for &kind in SetKind::ALL.iter() {
            write_sample(out, &kind.title(), self.sets.get(kind), self.limit)?;
        }
        Ok(())
    }

    /// Write every derived set to its own CSV file inside dir and return the
    /// paths written.
    ///
    /// Files are written one after the other and the first failure stops the
    /// export. Files written before the failure are kept.
    pub fn export_csv(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, CampaignError> {
        let dir = dir.as_ref();
        let mut paths = vec![];
        for &kind in SetKind::ALL.iter() {
            let set = self.sets.get(kind);
            let path = dir.join(kind.file_name());
            write_csv(set.iter(), &path)?;
            info!("wrote {} rows to {}", set.len(), path.display());
            paths.push(path);
        }
        return Ok(paths);
    }

    /// Export CSV files into dir, announcing the generated files on out.
    ///
    /// A failed export is not fatal: the cause is written to err and no paths
    /// are returned. Files already on disk are kept.
    pub fn export_or_report(
        &self,
        dir: impl AsRef<Path>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Vec<PathBuf> {
        match self.export_csv(dir) {
            Ok(paths) => {
                let names: Vec<String> = paths
                    .iter()
                    .filter_map(|p| p.file_name())
                    .map(|name| name.to_string_lossy().into_owned())
                    .collect();
                if let Err(e) = writeln!(out, "\nCSV files generated: {}", names.join(", ")) {
                    warn!("could not write to output: {}", e);
                }
                paths
            }
            Err(e) => {
                if let Err(e) = writeln!(err, "Error writing CSV files: {}", e) {
                    warn!("could not write to error output: {}", e);
                }
                vec![]
            }
        }
    }
}

/// Run the campaign described by cfg, print its report to out and export the
/// derived sets.
///
/// Only configuration and sampling errors are returned. Console and export
/// failures are reported and the run still finishes.
pub fn simple_campaign(
    cfg: &Config,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CampaignError> {
    let campaign = Campaign::from_seed(cfg)?;
    let report = Report::new(&campaign, cfg.print_limit());
    if let Err(e) = report
        .write_summary(out)
        .and_then(|_| report.write_samples(out))
    {
        warn!("could not print report: {}", e);
    }

    report.export_or_report(cfg.output_dir(), out, err);

    if let Err(e) = writeln!(out, "\nRun finished.") {
        warn!("could not write to output: {}", e);
    }
    Ok(())
}

/// Write a titled sample of at most limit members of set. Prints a
/// placeholder when the set is empty.
pub fn write_sample(
    out: &mut impl Write,
    title: &str,
    set: &BTreeSet<Identity>,
    limit: usize,
) -> io::Result<()> {
    writeln!(out, "\n-- {} (sample up to {}) --", title, limit)?;
    for id in set.iter().take(limit) {
        writeln!(out, "{}", id)?;
    }
    if set.is_empty() {
        writeln!(out, "<empty>")?;
    }
    Ok(())
}

/// Write labels to a CSV file with a "Name" header, one label per row in
/// lexicographic order.
pub fn write_csv<'a, I>(labels: I, path: impl AsRef<Path>) -> Result<(), CampaignError>
where
    I: IntoIterator<Item = &'a Identity>,
{
    let mut rows: Vec<&Identity> = labels.into_iter().collect();
    rows.sort();

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&[CSV_HEADER])?;
    for id in rows {
        writer.write_record(&[id])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = vec![];
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn csv_is_sorted_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let labels: Vec<Identity> = vec!["Citizen 3".into(), "Citizen 1".into()];
        write_csv(&labels, &path).unwrap();

        let data = fs::read_to_string(&path).unwrap();
        assert_eq!(data, "Name\nCitizen 1\nCitizen 3\n");

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(&reader.headers().unwrap()[0], "Name");
        let names: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        assert_eq!(names, vec!["Citizen 1", "Citizen 3"]);
    }

    #[test]
    fn csv_order_is_lexicographic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let labels: BTreeSet<Identity> = vec!["Citizen 2".into(), "Citizen 10".into()]
            .into_iter()
            .collect();
        write_csv(&labels, &path).unwrap();
        let data = fs::read_to_string(&path).unwrap();
        assert_eq!(data, "Name\nCitizen 10\nCitizen 2\n");
    }

    #[test]
    fn sample_placeholder_and_limit() {
        let empty = BTreeSet::new();
        let text = render(|out| write_sample(out, "Nobody", &empty, 20));
        assert_eq!(text, "\n-- Nobody (sample up to 20) --\n<empty>\n");

        let set: BTreeSet<Identity> = crate::population::new_population(30).into_iter().collect();
        let text = render(|out| write_sample(out, "Many", &set, 20));
        assert_eq!(text.lines().count(), 22);
        assert!(!text.contains("<empty>"));
    }

    #[test]
    fn summary_counts() {
        let campaign = Campaign::from_seed(&Config::default()).unwrap();
        let report = Report::new(&campaign, 20);
        let text = render(|out| report.write_summary(out));
        assert!(text.contains("Total citizens: 500\n"));
        assert!(text.contains("Vaccinated (at least 1 dose) - Pfizer: 75\n"));
        assert!(text.contains("Vaccinated (at least 1 dose) - AstraZeneca: 75\n"));
        let line = format!("Not vaccinated: {}\n", report.sets().n_not_vaccinated());
        assert!(text.contains(&line));
    }

    #[test]
    fn export_all_sets() {
        let dir = tempfile::tempdir().unwrap();
        let campaign = Campaign::from_seed(&Config::default()).unwrap();
        let report = Report::new(&campaign, 20);
        let paths = report.export_csv(dir.path()).unwrap();
        assert_eq!(paths.len(), 4);

        let data = fs::read_to_string(dir.path().join("only_pfizer.csv")).unwrap();
        let mut lines = data.lines();
        assert_eq!(lines.next(), Some("Name"));
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), report.sets().n_only_pfizer());
        let mut sorted = rows.clone();
        sorted.sort();
        assert_eq!(rows, sorted);
    }

    #[test]
    fn export_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let campaign = Campaign::from_seed(&Config::default()).unwrap();
        let report = Report::new(&campaign, 20);
        let err = report.export_csv(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, CampaignError::Csv(_) | CampaignError::Io(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn failed_export_is_reported_and_run_finishes() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::default();
        cfg.set_output_dir(dir.path().join("missing").join("deeper"));

        let (mut out, mut err) = (vec![], vec![]);
        simple_campaign(&cfg, &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Error writing CSV files: "));
        assert_eq!(err.lines().count(), 1);
        assert!(!out.contains("CSV files generated"));
        assert!(out.ends_with("\nRun finished.\n"));
    }

    #[test]
    fn successful_run_lists_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::default();
        cfg.set_output_dir(dir.path().to_path_buf());

        let (mut out, mut err) = (vec![], vec![]);
        simple_campaign(&cfg, &mut out, &mut err).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(err.is_empty());
        assert!(out.starts_with("=== Vaccination summary (simulated) ===\n"));
        assert!(out.contains(
            "CSV files generated: not_vaccinated.csv, both_doses.csv, only_pfizer.csv, only_astrazeneca.csv\n"
        ));
        for &kind in SetKind::ALL.iter() {
            assert!(dir.path().join(kind.file_name()).exists());
        }
    }

    #[test]
    fn sampling_errors_are_fatal() {
        let mut cfg = Config::default();
        cfg.set_pfizer_count(501);
        let (mut out, mut err) = (vec![], vec![]);
        let res = simple_campaign(&cfg, &mut out, &mut err);
        assert!(matches!(res, Err(CampaignError::InvalidArgument(_))));
        assert!(out.is_empty() && err.is_empty());
    }

    /// Writer that fails every write, like a closed pipe.
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn console_failure_does_not_abort_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::default();
        cfg.set_output_dir(dir.path().to_path_buf());

        let mut err = vec![];
        simple_campaign(&cfg, &mut Broken, &mut err).unwrap();
        assert!(err.is_empty());
        assert!(dir.path().join("both_doses.csv").exists());
    }
}
