//! Zone assembler: resolves every name and orders the surviving records.
//!
//! All names are resolved first, against their bare registry form, so the
//! domain length rule sees the name before any zone suffix is attached.
//! Owner names are then qualified according to an [`Origin`]. Emission then runs two passes over the
//! per-name results in input order: every CNAME (first claim of an owner
//! name wins), then every other record whose owner name was not claimed by a
//! CNAME anywhere in the zone.

use serde::Serialize;
use std::collections::HashSet;

use crate::resolver::resolve;
use crate::{ImportIntent, RawName, RecordKind, ResolutionResult, ResolvedRecord};

/// How resolved owner names are written into the zone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Origin {
    /// Names are absolute already; only the root dot is added
    #[default]
    Root,
    /// Names are relative to this zone, e.g. `bit`
    Zone(String),
    /// Names stay relative to the template's `$ORIGIN`
    Relative,
}

impl Origin {
    /// `bit` gives [`Origin::Zone`]; an empty TLD keeps names relative
    #[must_use]
    pub fn for_tld(tld: &str) -> Self {
        let zone = tld.trim_matches('.');
        if zone.is_empty() {
            Self::Relative
        } else {
            Self::Zone(zone.to_owned())
        }
    }

    /// Qualify one owner name. Names ending in a dot are left alone.
    #[must_use]
    pub fn qualify(&self, name: &str) -> String {
        match self {
            _ if name.ends_with('.') => name.to_owned(),
            Self::Relative => name.to_owned(),
            Self::Root => format!("{name}."),
            Self::Zone(zone) => format!("{name}.{zone}."),
        }
    }

    fn qualify_owners(&self, result: &mut ResolutionResult) {
        for record in result.cnames.iter_mut().chain(result.others.iter_mut()) {
            record.domain = self.qualify(&record.domain);
        }
        for intent in &mut result.imports {
            intent.domain = self.qualify(&intent.domain);
        }
    }
}

/// Per-name resolution results, ready to be emitted.
///
/// Emission is lazy and holds no state between calls: [`lines`](Self::lines)
/// and [`records`](Self::records) can be called any number of times and
/// always produce the same sequence.
#[derive(Debug, Clone, Default)]
pub struct AssembledZone {
    results: Vec<ResolutionResult>,
}

/// Resolve a list of absolute names into an [`AssembledZone`].
///
/// Same as [`assemble_zone_in`] with [`Origin::Root`]: `example.com`
/// is emitted as `example.com.`.
#[must_use]
pub fn assemble_zone(names: &[RawName]) -> AssembledZone {
    assemble_zone_in(names, &Origin::Root)
}

/// Resolve a list of names into an [`AssembledZone`] under `origin`.
///
/// Names with a `null` value are skipped. Each name is validated and
/// resolved as given; owner names are qualified afterwards.
#[must_use]
pub fn assemble_zone_in(names: &[RawName], origin: &Origin) -> AssembledZone {
    let results = names
        .iter()
        .filter(|raw| !raw.json.is_null())
        .map(|raw| {
            let mut result = resolve(&raw.name, &raw.json);
            origin.qualify_owners(&mut result);
            result
        })
        .collect();

    AssembledZone { results }
}

impl AssembledZone {
    /// Build from results that were resolved elsewhere, in input order.
    #[must_use]
    pub fn from_results(results: Vec<ResolutionResult>) -> Self {
        Self { results }
    }

    /// The per-name results, in input order
    #[must_use]
    pub fn results(&self) -> &[ResolutionResult] {
        &self.results
    }

    /// Records that make it into the zone, in emission order
    #[must_use]
    pub fn records(&self) -> ZoneRecords<'_> {
        ZoneRecords {
            results: &self.results,
            seen_cname_sources: HashSet::new(),
            pass: Pass::Cnames,
            name_index: 0,
            record_index: 0,
        }
    }

    /// Zone file lines, in emission order
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.records().map(ResolvedRecord::zone_line)
    }

    /// All import intents, in input order
    pub fn imports(&self) -> impl Iterator<Item = &ImportIntent> + '_ {
        self.results.iter().flat_map(|result| &result.imports)
    }

    /// Count emitted and dropped records
    #[must_use]
    pub fn stats(&self) -> ZoneStats {
        let mut stats = ZoneStats {
            names: self.results.len(),
            imports: self.imports().count(),
            ..ZoneStats::default()
        };

        for record in self.records() {
            stats.counts[record.kind as usize] += 1;
        }

        let cnames: usize = self.results.iter().map(|r| r.cnames.len()).sum();
        let others: usize = self.results.iter().map(|r| r.others.len()).sum();
        let emitted_cnames = stats.count(RecordKind::Cname);
        stats.duplicate_cnames = cnames - emitted_cnames;
        stats.suppressed = others - (stats.emitted() - emitted_cnames);
        stats
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Cnames,
    Others,
    Done,
}

/// Iterator over the records of an [`AssembledZone`].
///
/// Tracks which owner names already carry a CNAME; that set only grows.
#[derive(Debug)]
pub struct ZoneRecords<'a> {
    results: &'a [ResolutionResult],
    seen_cname_sources: HashSet<&'a str>,
    pass: Pass,
    name_index: usize,
    record_index: usize,
}

impl<'a> ZoneRecords<'a> {
    fn current_list(&self) -> Option<&'a [ResolvedRecord]> {
        let results = self.results;
        let result = results.get(self.name_index)?;
        match self.pass {
            Pass::Cnames => Some(result.cnames.as_slice()),
            Pass::Others => Some(result.others.as_slice()),
            Pass::Done => None,
        }
    }

    fn next_pass(&mut self) {
        self.pass = match self.pass {
            Pass::Cnames => Pass::Others,
            Pass::Others | Pass::Done => Pass::Done,
        };
        self.name_index = 0;
        self.record_index = 0;
    }
}

impl<'a> Iterator for ZoneRecords<'a> {
    type Item = &'a ResolvedRecord;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pass != Pass::Done {
            let Some(list) = self.current_list() else {
                self.next_pass();
                continue;
            };

            let Some(record) = list.get(self.record_index) else {
                self.name_index += 1;
                self.record_index = 0;
                continue;
            };
            self.record_index += 1;

            let emit = if self.pass == Pass::Cnames {
                self.seen_cname_sources.insert(record.domain.as_str())
            } else {
                !self.seen_cname_sources.contains(record.domain.as_str())
            };

            if emit {
                return Some(record);
            }
        }

        None
    }
}

/// Summary of an assembled zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ZoneStats {
    /// Names that were resolved
    pub names: usize,
    /// Emitted records per kind, indexed like [`RecordKind::ALL`]
    pub counts: [usize; 6],
    /// Non-CNAME records dropped because their owner name has a CNAME
    pub suppressed: usize,
    /// CNAMEs dropped because an earlier CNAME claimed the same owner name
    pub duplicate_cnames: usize,
    /// Import intents collected
    pub imports: usize,
}

impl ZoneStats {
    /// Emitted records of one kind
    #[must_use]
    pub const fn count(&self, kind: RecordKind) -> usize {
        self.counts[kind as usize]
    }

    /// Total emitted records
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.counts.iter().sum()
    }
}
