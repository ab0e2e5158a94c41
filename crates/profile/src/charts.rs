// File: crates/profile/src/charts.rs
// Summary: Turn reshaped profile data into chart attributes for the three dashboard charts.

use chart_core::geometry::ratio_or_zero;
use chart_core::{Attributes, ChartKind, Palette};

use crate::error::ProfileError;
use crate::model::ProfileData;
use crate::reshape::{count_interactions, groups, xp_shares, XpShare};

/// Charts keep at most this many entries.
pub const TOP_N: usize = 10;

/// How dashboard charts pick their colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Colors {
    /// The widgets' default hues.
    #[default]
    Default,
    /// Fresh random colors per chart, reproducible from the seed.
    Random { seed: u64 },
}

impl Colors {
    fn apply(self, attrs: Attributes, n: usize, salt: u64) -> Attributes {
        match self {
            Colors::Default => attrs,
            Colors::Random { seed } => attrs.with("colors", Palette::random(n, seed.wrapping_add(salt)).to_attr()),
        }
    }
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().map(|v| v.to_string()).collect::<Vec<_>>().join(";")
}

/// Down/up audit volume as a two-wedge donut.
pub fn audit_ratio_pie(total_up: f64, total_down: f64, colors: Colors) -> Attributes {
    let total = total_up + total_down;
    let down = ratio_or_zero(total_down * 100.0, total);
    let up = ratio_or_zero(total_up * 100.0, total);
    let attrs = Attributes::new()
        .with("id", "audit-ratio")
        .with("data", format!("{down};{up}"))
        .with("labels", format!("Down - {down:.2};Up - {up:.2}"))
        .with("gap", "0.06")
        .with("donut", "0.2");
    colors.apply(attrs, 2, 1)
}

/// The largest xp shares as bars, largest first.
pub fn xp_bar(shares: &[XpShare], colors: Colors) -> Attributes {
    let mut sorted = shares.to_vec();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
    sorted.truncate(TOP_N);
    let attrs = Attributes::new()
        .with("data", join(sorted.iter().map(|s| format!("{:.2}", s.score))))
        .with("labels", join(sorted.iter().map(|s| &s.name)));
    colors.apply(attrs, sorted.len(), 2)
}

/// Most frequent collaborators on a radar; `max` leaves one step of headroom.
pub fn interactions_radar(interactions: &[(String, u32)], colors: Colors) -> Attributes {
    let top = &interactions[..interactions.len().min(TOP_N)];
    let max = top.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
    let attrs = Attributes::new()
        .with("scores", join(top.iter().map(|(_, c)| c)))
        .with("labels", join(top.iter().map(|(login, _)| login)))
        .with("ids", join(top.iter().map(|(login, _)| format!("input_{login}"))))
        .with("max", max.to_string());
    colors.apply(attrs, top.len(), 3)
}

/// Attributes for every dashboard chart, in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    pub pie: Attributes,
    pub bar: Attributes,
    pub radar: Attributes,
}

impl Dashboard {
    pub fn from_profile(data: &ProfileData, colors: Colors) -> Result<Self, ProfileError> {
        let user = data.primary_user().ok_or(ProfileError::MissingUser)?;
        let summaries = groups(&user.groups);
        let interactions = count_interactions(&summaries, &user.login);
        let shares = xp_shares(&data.xp, data.xp_total());
        tracing::debug!(
            login = %user.login,
            groups = summaries.len(),
            collaborators = interactions.len(),
            projects = shares.len(),
            "dashboard data reshaped"
        );
        Ok(Self {
            pie: audit_ratio_pie(user.total_up, user.total_down, colors),
            bar: xp_bar(&shares, colors),
            radar: interactions_radar(&interactions, colors),
        })
    }

    pub fn charts(&self) -> [(ChartKind, &Attributes); 3] {
        [(ChartKind::Pie, &self.pie), (ChartKind::Bar, &self.bar), (ChartKind::Radar, &self.radar)]
    }
}
