// File: crates/profile/tests/reshape.rs
// Purpose: Reshaping of a saved dashboard response into chart series.

use profile::model::{SkillTx, XpTx};
use profile::reshape::{format_size, is_checkpoint, resource_name, skill_label, summary, Auditor, GroupSummary};
use profile::{count_interactions, groups, parse_profile, top_skills, xp_shares, ProfileData};

fn fixture() -> ProfileData {
    parse_profile(include_str!("fixtures/response.json")).expect("fixture parses")
}

#[test]
fn groups_flatten_members_and_auditors() {
    let data = fixture();
    let user = data.primary_user().expect("user");
    let g = groups(&user.groups);
    assert_eq!(g.len(), 3);
    assert_eq!(g[0].project_name, "go-reloaded");
    assert_eq!(g[0].members, vec!["ada", "bob"]);
    assert_eq!(g[0].auditors[0].name, "cid");
    assert_eq!(g[0].auditors[0].grade, "1.2");
    assert_eq!(g[1].auditors[0].grade, "1");
}

#[test]
fn interactions_skip_self_and_sort_descending() {
    let data = fixture();
    let user = data.primary_user().expect("user");
    let counts = count_interactions(&groups(&user.groups), &user.login);
    // cid: member twice + auditor once; bob: member once + auditor once; dee once.
    assert_eq!(
        counts,
        vec![("cid".to_string(), 3), ("bob".to_string(), 2), ("dee".to_string(), 1)]
    );
}

#[test]
fn interaction_ties_keep_first_seen_order() {
    let data = fixture();
    let user = data.primary_user().expect("user");
    let mut g = groups(&user.groups);
    g.truncate(1);
    let counts = count_interactions(&g, "ada");
    // bob (member) is seen before cid (auditor).
    assert_eq!(counts, vec![("bob".to_string(), 1), ("cid".to_string(), 1)]);
}

#[test]
fn interactions_scale_to_many_groups() {
    let groups: Vec<GroupSummary> = (0..5000)
        .map(|i| GroupSummary {
            project_name: format!("p{i}"),
            members: vec!["ada".to_string(), format!("u{}", i % 1000)],
            auditors: vec![Auditor { name: "zed".to_string(), grade: String::new() }],
        })
        .collect();
    let counts = count_interactions(&groups, "ada");
    assert_eq!(counts.len(), 1001);
    assert_eq!(counts[0], ("zed".to_string(), 5000));
    // Equal counts stay in first-seen order.
    assert_eq!(counts[1], ("u0".to_string(), 5));
    assert_eq!(counts[1000], ("u999".to_string(), 5));
}

#[test]
fn xp_shares_drop_checkpoints() {
    let data = fixture();
    let shares = xp_shares(&data.xp, data.xp_total());
    let names: Vec<&str> = shares.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["go-reloaded", "ascii-art", "lem-in"]);
    assert_eq!(shares[0].score, 25.0);
    assert_eq!(shares[1].score, 50.0);
    assert_eq!(shares[2].score, 15.0);
}

#[test]
fn xp_share_rounding_and_zero_total() {
    let xp = vec![XpTx { amount: 1.0, path: "/a/b/c".into(), created_at: String::new() }];
    assert_eq!(xp_shares(&xp, 3.0)[0].score, 33.33);
    assert_eq!(xp_shares(&xp, 0.0)[0].score, 0.0);
}

#[test]
fn checkpoint_detection_uses_third_segment() {
    assert!(is_checkpoint("/dakar/div-01/checkpoint/x"));
    assert!(!is_checkpoint("/dakar/checkpoint/x"));
    assert!(!is_checkpoint("/dakar/div-01/go-reloaded"));
    assert_eq!(resource_name("/dakar/div-01/go-reloaded"), "go-reloaded");
    assert_eq!(resource_name("plain"), "plain");
}

#[test]
fn top_skills_sorted_and_truncated() {
    let data = fixture();
    let top = top_skills(&data.skills, 2);
    assert_eq!(
        top,
        vec![
            SkillTx { kind: "skill_go".into(), amount: 55.0 },
            SkillTx { kind: "skill_algo".into(), amount: 30.0 },
        ]
    );
    assert_eq!(skill_label(&top[0].kind), "GO");
}

#[test]
fn summary_lines() {
    let data = fixture();
    let s = summary(data.primary_user().expect("user"), data.xp_total());
    assert_eq!(s.full_name, "Ada Lovelace");
    assert_eq!(s.gender.as_deref(), Some("F"));
    assert_eq!(s.city.as_deref(), Some("Dakar"));
    assert_eq!(s.xp_total, 50000.0);
    assert_eq!(format_size(s.xp_total), "50 KB");
    assert_eq!(format_size(999.0), "999 Bytes");
    assert_eq!(format_size(2_500_000.0), "2 MB");
}
