// File: crates/profile/src/model.rs
// Summary: Serde model of the dashboard GraphQL query and its response envelope.

use serde::Deserialize;

/// Everything the dashboard needs in one round trip.
pub const PROFILE_QUERY: &str = r#"{
  user {
    id
    login
    firstName
    lastName
    campus
    auditRatio
    totalUp
    totalDown
    attrs
    groups {
      group {
        members { user { login } }
        object { name }
        auditors(where: {grade: {_is_null: false}}) {
          auditor { login }
          grade
        }
      }
    }
  }
  audits: transaction(order_by: {createdAt: asc}, where: {type: {_regex: "up|down"}}) {
    type
    amount
    path
    createdAt
  }
  xp: transaction(order_by: {createdAt: asc}, where: {type: {_eq: "xp"}, eventId: {_eq: 56}}) {
    createdAt
    amount
    path
  }
  skills: transaction(
    order_by: {type: asc, createdAt: desc, amount: desc}
    distinct_on: [type]
    where: {eventId: {_eq: 56}, _and: {type: {_like: "skill_%"}}}
  ) {
    type
    amount
  }
  xpTotal: transaction_aggregate(where: {type: {_eq: "xp"}, eventId: {_eq: 56}}) {
    aggregate { sum { amount } }
  }
}"#;

/// `{ "data": ..., "errors": [...] }`
#[derive(Clone, Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub extensions: Option<ErrorExtensions>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorExtensions {
    pub code: Option<String>,
}

impl GraphQlError {
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref().and_then(|e| e.code.as_deref())
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub user: Vec<User>,
    #[serde(default)]
    pub audits: Vec<AuditTx>,
    #[serde(default)]
    pub xp: Vec<XpTx>,
    #[serde(default)]
    pub skills: Vec<SkillTx>,
    #[serde(default)]
    pub xp_total: XpAggregate,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub login: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub campus: Option<String>,
    #[serde(default)]
    pub audit_ratio: Option<f64>,
    #[serde(default)]
    pub total_up: f64,
    #[serde(default)]
    pub total_down: f64,
    #[serde(default)]
    pub attrs: UserAttrs,
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
}

/// Free-form profile attributes; only the fields the dashboard shows are typed.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UserAttrs {
    pub email: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    #[serde(rename = "nationality1")]
    pub nationality: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GroupEntry {
    pub group: Group,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub members: Vec<Member>,
    pub object: NamedObject,
    #[serde(default)]
    pub auditors: Vec<AuditorEntry>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Member {
    pub user: LoginRef,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginRef {
    pub login: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NamedObject {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AuditorEntry {
    pub auditor: LoginRef,
    pub grade: Option<f64>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTx {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XpTx {
    pub amount: f64,
    pub path: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillTx {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct XpAggregate {
    #[serde(default)]
    pub aggregate: AggregateSum,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AggregateSum {
    #[serde(default)]
    pub sum: SumAmount,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SumAmount {
    pub amount: Option<f64>,
}

impl ProfileData {
    /// The signed-in user; the query returns exactly one.
    pub fn primary_user(&self) -> Option<&User> {
        self.user.first()
    }

    /// Sum of all xp transactions, zero when the aggregate is null.
    pub fn xp_total(&self) -> f64 {
        self.xp_total.aggregate.sum.amount.unwrap_or(0.0)
    }
}
