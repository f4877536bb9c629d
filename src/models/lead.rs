use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::models::SortValue;
use crate::utils::columns::ColDef;

/// Pipeline stage, declared in funnel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    ProposalSent,
    Won,
    Lost,
}

impl LeadStatus {
    fn stage(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    pub status: LeadStatus,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_contacted: Option<OffsetDateTime>,
}

fn fmt_date(date: &OffsetDateTime) -> Cow<'static, str> {
    Cow::Owned(date.format(&Rfc3339).unwrap_or_default())
}

pub static LEAD_COLS: &[ColDef<Lead>] = &[
    ColDef {
        id: "name",
        title: "Name",
        sortable: true,
        accessor: |l: &Lead| Cow::Borrowed(l.name.as_str()),
        sort_key: Some(|l: &Lead| SortValue::from(l.name.to_lowercase())),
    },
    ColDef {
        id: "company",
        title: "Company",
        sortable: true,
        accessor: |l: &Lead| Cow::Borrowed(l.company.as_deref().unwrap_or("-")),
        sort_key: Some(|l: &Lead| SortValue::from(l.company.as_deref().map(str::to_lowercase))),
    },
    ColDef {
        id: "status",
        title: "Status",
        sortable: true,
        accessor: |l: &Lead| Cow::Borrowed(l.status.into()),
        sort_key: Some(|l: &Lead| SortValue::from(l.status.stage())),
    },
    ColDef {
        id: "score",
        title: "Score",
        sortable: true,
        accessor: |l: &Lead| match l.score {
            Some(s) => Cow::Owned(format!("{s:.1}")),
            None => Cow::Borrowed("-"),
        },
        sort_key: Some(|l: &Lead| SortValue::from(l.score)),
    },
    ColDef {
        id: "created_at",
        title: "Created",
        sortable: true,
        accessor: |l: &Lead| fmt_date(&l.created_at),
        sort_key: Some(|l: &Lead| SortValue::from(l.created_at)),
    },
    ColDef {
        id: "last_contacted",
        title: "LastContacted",
        sortable: true,
        accessor: |l: &Lead| match &l.last_contacted {
            Some(d) => fmt_date(d),
            None => Cow::Borrowed("-"),
        },
        sort_key: Some(|l: &Lead| SortValue::from(l.last_contacted)),
    },
    ColDef {
        id: "id",
        title: "Id",
        sortable: false,
        accessor: |l: &Lead| Cow::Borrowed(l.id.as_str()),
        sort_key: None,
    },
];
