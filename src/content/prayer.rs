//! Prayer templates
//!
//! A prayer is four lines: an opening for the slot, a petition for the
//! verse's theme, a trust line, and a closing.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

use super::TimeOfDay;
use crate::consts::DEFAULT_THEME;
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Openings {
    pub(crate) morning: Vec<String>,
    pub(crate) evening: Vec<String>,
}

impl Openings {
    fn for_slot(&self, slot: TimeOfDay) -> &[String] {
        match slot {
            TimeOfDay::Morning => &self.morning,
            TimeOfDay::Evening => &self.evening,
        }
    }
}

/// Immutable template set used to generate prayers
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PrayerTemplates {
    pub(crate) openings: Openings,
    pub(crate) petitions: BTreeMap<String, Vec<String>>,
    pub(crate) trust_lines: Vec<String>,
    pub(crate) closings: Vec<String>,
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PrayerTemplates {
    fn default() -> Self {
        let mut petitions = BTreeMap::new();
        petitions.insert(
            "guidance".to_string(),
            lines(&[
                "Patnubayan Ninyo ang aking mga hakbang sa buong araw.",
                "Gabayan Ninyo ako sa bawat desisyong aking haharapin.",
            ]),
        );
        petitions.insert(
            "peace".to_string(),
            lines(&[
                "Punuin Ninyo ang aking puso ng kapayapaan.",
                "Ibigay Ninyo sa akin ang katahimikan ng loob.",
            ]),
        );
        petitions.insert(
            "strength".to_string(),
            lines(&[
                "Bigyan Ninyo ako ng lakas at tibay ng loob.",
                "Palakasin Ninyo ako sa aking mga gawain.",
            ]),
        );
        petitions.insert(
            "rest".to_string(),
            lines(&[
                "Sa aking pamamahinga, iniaalay ko sa Inyo ang aking pagod.",
                "Ipinagkakatiwala ko sa Inyo ang lahat ng aking alalahanin.",
            ]),
        );

        Self {
            openings: Openings {
                morning: lines(&[
                    "Panginoon, salamat po sa bagong umaga.",
                    "Ama naming Diyos, salamat po sa liwanag ng araw.",
                ]),
                evening: lines(&[
                    "Ama naming Diyos, salamat po sa araw na ito.",
                    "Panginoon, sa pagtatapos ng araw na ito, kami po ay nagpapasalamat.",
                ]),
            },
            petitions,
            trust_lines: lines(&[
                "Sa Inyo po ako lubos na nagtitiwala.",
                "Ikaw po ang aking sandigan sa lahat ng oras.",
            ]),
            closings: lines(&["Amen.", "Ito po ang aming panalangin. Amen."]),
        }
    }
}

impl PrayerTemplates {
    /// Load a template file, or the built-in set when no path is configured
    pub(crate) fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let templates = match path {
            None => Self::default(),
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| AppError::Content {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
                serde_json::from_str(&content).map_err(|e| AppError::Content {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?
            }
        };
        templates.validate()?;
        Ok(templates)
    }

    fn validate(&self) -> Result<(), AppError> {
        let mut lists: Vec<(String, &Vec<String>)> = vec![
            ("openings.morning".to_string(), &self.openings.morning),
            ("openings.evening".to_string(), &self.openings.evening),
            ("trust_lines".to_string(), &self.trust_lines),
            ("closings".to_string(), &self.closings),
        ];
        for (theme, petitions) in &self.petitions {
            lists.push((format!("petitions.{theme}"), petitions));
        }

        if let Some((name, _)) = lists.iter().find(|(_, list)| list.is_empty()) {
            return Err(AppError::EmptyPool {
                pool: format!("prayer templates {name}"),
            });
        }
        if !self.petitions.contains_key(DEFAULT_THEME) {
            return Err(AppError::EmptyPool {
                pool: format!("prayer templates petitions.{DEFAULT_THEME}"),
            });
        }
        Ok(())
    }

    fn petitions_for(&self, theme: Option<&str>) -> &[String] {
        theme
            .and_then(|t| self.petitions.get(t))
            .or_else(|| self.petitions.get(DEFAULT_THEME))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Draw one line from each part, independently at random
    pub(crate) fn generate<R: Rng + ?Sized>(
        &self,
        slot: TimeOfDay,
        theme: Option<&str>,
        rng: &mut R,
    ) -> String {
        let parts: [&[String]; 4] = [
            self.openings.for_slot(slot),
            self.petitions_for(theme),
            &self.trust_lines,
            &self.closings,
        ];
        parts
            .iter()
            .filter_map(|part| part.choose(rng))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every prayer `generate` can produce for the slot and theme
    pub(crate) fn variants(&self, slot: TimeOfDay, theme: Option<&str>) -> Vec<String> {
        let mut out = Vec::new();
        for opening in self.openings.for_slot(slot) {
            for petition in self.petitions_for(theme) {
                for trust in &self.trust_lines {
                    for closing in &self.closings {
                        out.push(format!("{opening}\n{petition}\n{trust}\n{closing}"));
                    }
                }
            }
        }
        out
    }
}
