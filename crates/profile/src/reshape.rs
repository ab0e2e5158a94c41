// File: crates/profile/src/reshape.rs
// Summary: Flatten the profile response into the series the dashboard charts plot.

use std::collections::HashMap;

use chart_core::geometry::ratio_or_zero;

use crate::model::{GroupEntry, SkillTx, User, XpTx};

/// Path segment (after the leading `/`) that marks checkpoint exercises.
const CHECKPOINT_SEGMENT: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Auditor {
    pub name: String,
    pub grade: String,
}

/// One project group the user took part in.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupSummary {
    pub project_name: String,
    pub members: Vec<String>,
    pub auditors: Vec<Auditor>,
}

pub fn groups(entries: &[GroupEntry]) -> Vec<GroupSummary> {
    entries
        .iter()
        .map(|entry| {
            let group = &entry.group;
            GroupSummary {
                project_name: group.object.name.clone(),
                members: group.members.iter().map(|m| m.user.login.clone()).collect(),
                auditors: group
                    .auditors
                    .iter()
                    .map(|a| Auditor {
                        name: a.auditor.login.clone(),
                        grade: a.grade.map(|g| g.to_string()).unwrap_or_default(),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// How often each other login shows up as a teammate or auditor, most frequent first.
/// Members are counted before auditors; ties keep first-seen order.
pub fn count_interactions(groups: &[GroupSummary], login: &str) -> Vec<(String, u32)> {
    let members = groups.iter().flat_map(|g| g.members.iter().map(String::as_str));
    let auditors = groups.iter().flat_map(|g| g.auditors.iter().map(|a| a.name.as_str()));

    // Position of each login in `counts`, which keeps first-seen order.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, u32)> = Vec::new();
    for name in members.chain(auditors).filter(|name| *name != login) {
        let i = *index.entry(name).or_insert_with(|| {
            counts.push((name.to_string(), 0));
            counts.len() - 1
        });
        counts[i].1 += 1;
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[derive(Clone, Debug, PartialEq)]
pub struct XpShare {
    /// Last path segment.
    pub name: String,
    /// Percent of the total, rounded to two decimals.
    pub score: f64,
}

pub fn is_checkpoint(path: &str) -> bool {
    path.split('/').nth(CHECKPOINT_SEGMENT) == Some("checkpoint")
}

/// Last `/`-separated segment of a path.
pub fn resource_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Per-project share of the xp total. Checkpoint entries are dropped.
pub fn xp_shares(xp: &[XpTx], total: f64) -> Vec<XpShare> {
    xp.iter()
        .filter(|tx| !is_checkpoint(&tx.path))
        .map(|tx| XpShare {
            name: resource_name(&tx.path).to_string(),
            score: round2(ratio_or_zero(tx.amount * 100.0, total)),
        })
        .collect()
}

/// The `n` largest skills, largest first.
pub fn top_skills(skills: &[SkillTx], n: usize) -> Vec<SkillTx> {
    let mut sorted = skills.to_vec();
    sorted.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    sorted.truncate(n);
    sorted
}

/// `skill_go` -> `GO`
pub fn skill_label(kind: &str) -> String {
    kind.strip_prefix("skill_").unwrap_or(kind).to_uppercase()
}

/// Identity lines shown next to the charts.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSummary {
    pub login: String,
    pub full_name: String,
    pub email: Option<String>,
    pub campus: Option<String>,
    pub city: Option<String>,
    /// First letter only.
    pub gender: Option<String>,
    pub audit_ratio: Option<f64>,
    pub xp_total: f64,
}

pub fn summary(user: &User, xp_total: f64) -> ProfileSummary {
    ProfileSummary {
        login: user.login.clone(),
        full_name: format!("{} {}", user.first_name, user.last_name).trim().to_string(),
        email: user.attrs.email.clone(),
        campus: user.campus.clone(),
        city: user.attrs.city.clone(),
        gender: user.attrs.gender.as_deref().and_then(|g| g.chars().next()).map(String::from),
        audit_ratio: user.audit_ratio,
        xp_total,
    }
}

/// Human-readable byte-style size with decimal units (`1500` -> `2 KB`).
pub fn format_size(bytes: f64) -> String {
    const KB: f64 = 1000.0;
    const MB: f64 = KB * 1000.0;
    const GB: f64 = MB * 1000.0;
    if bytes >= GB {
        format!("{:.0} GB", bytes / GB)
    } else if bytes >= MB {
        format!("{:.0} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes / KB)
    } else {
        format!("{bytes} Bytes")
    }
}
