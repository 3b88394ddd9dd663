use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Report;
use crate::store::DataStore;
use chrono::NaiveDate;

pub fn run<S: DataStore>(store: &S, today: NaiveDate) -> Result<CmdResult> {
    let report = Report {
        date: today,
        pending: store.load_pending()?.len(),
        completed: store.load_completed()?.len(),
    };
    tracing::debug!(pending = report.pending, completed = report.completed, "report");
    Ok(CmdResult::default().with_report(report))
}
