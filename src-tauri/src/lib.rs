use std::sync::{Mutex, MutexGuard};

use sb_core::board::IncidentBoard;
use sb_core::demo::seed_demo_board;
use sb_core::domain::{Incident, Severity, SeverityFilter, SortOrder};
use sb_core::error::AppError;
use sb_core::snapshot::{build_board_snapshot, BoardSnapshotV1};
use tauri::State;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// The one shared mutable resource: the in-memory board behind the command
/// boundary. Commands are serialized by the host runtime in practice; the
/// mutex only satisfies the managed-state contract.
struct BoardState(Mutex<IncidentBoard>);

#[derive(Debug, serde::Serialize)]
pub struct SubmitResultV1 {
    /// `None` when validation failed; the per-field flags travel inside the
    /// snapshot.
    pub created: Option<Incident>,
    pub snapshot: BoardSnapshotV1,
}

fn now_rfc3339_utc() -> Result<String, AppError> {
    OffsetDateTime::now_utc().format(&Rfc3339).map_err(|e| {
        AppError::new("TIME_FORMAT_FAILED", "Failed to format time").with_details(e.to_string())
    })
}

fn lock_board<'a>(state: &'a State<'_, BoardState>) -> Result<MutexGuard<'a, IncidentBoard>, AppError> {
    state.0.lock().map_err(|e| {
        AppError::new("STATE_LOCK_FAILED", "Incident board state is poisoned")
            .with_details(e.to_string())
    })
}

#[tauri::command]
fn board_snapshot(state: State<'_, BoardState>) -> Result<BoardSnapshotV1, AppError> {
    let board = lock_board(&state)?;
    Ok(build_board_snapshot(&board))
}

#[tauri::command]
fn set_severity_filter(
    state: State<'_, BoardState>,
    filter: SeverityFilter,
) -> Result<BoardSnapshotV1, AppError> {
    let mut board = lock_board(&state)?;
    board.set_severity_filter(filter);
    Ok(build_board_snapshot(&board))
}

#[tauri::command]
fn set_sort_order(
    state: State<'_, BoardState>,
    order: SortOrder,
) -> Result<BoardSnapshotV1, AppError> {
    let mut board = lock_board(&state)?;
    board.set_sort_order(order);
    Ok(build_board_snapshot(&board))
}

#[tauri::command]
fn toggle_report_form(state: State<'_, BoardState>) -> Result<BoardSnapshotV1, AppError> {
    let mut board = lock_board(&state)?;
    board.toggle_form();
    Ok(build_board_snapshot(&board))
}

#[tauri::command]
fn set_draft_title(
    state: State<'_, BoardState>,
    value: String,
) -> Result<BoardSnapshotV1, AppError> {
    let mut board = lock_board(&state)?;
    board.set_draft_title(value);
    Ok(build_board_snapshot(&board))
}

#[tauri::command]
fn set_draft_description(
    state: State<'_, BoardState>,
    value: String,
) -> Result<BoardSnapshotV1, AppError> {
    let mut board = lock_board(&state)?;
    board.set_draft_description(value);
    Ok(build_board_snapshot(&board))
}

#[tauri::command]
fn set_draft_severity(
    state: State<'_, BoardState>,
    severity: Severity,
) -> Result<BoardSnapshotV1, AppError> {
    let mut board = lock_board(&state)?;
    board.set_draft_severity(severity);
    Ok(build_board_snapshot(&board))
}

#[tauri::command]
fn submit_draft(state: State<'_, BoardState>) -> Result<SubmitResultV1, AppError> {
    let reported_at = now_rfc3339_utc()?;
    let mut board = lock_board(&state)?;
    let created = board.submit_draft(&reported_at).ok();
    Ok(SubmitResultV1 {
        created,
        snapshot: build_board_snapshot(&board),
    })
}

#[tauri::command]
fn toggle_incident_details(
    state: State<'_, BoardState>,
    incident_id: i64,
) -> Result<BoardSnapshotV1, AppError> {
    let mut board = lock_board(&state)?;
    board.toggle_details(incident_id);
    Ok(build_board_snapshot(&board))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(BoardState(Mutex::new(seed_demo_board())))
        .invoke_handler(tauri::generate_handler![
            board_snapshot,
            set_severity_filter,
            set_sort_order,
            toggle_report_form,
            set_draft_title,
            set_draft_description,
            set_draft_severity,
            submit_draft,
            toggle_incident_details
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
