type Error = Box<dyn std::error::Error>;
type Result<T> = core::result::Result<T, Error>; // For tests.

use asst_watch::ais::{
	Annotation, AnnotationKind, ContentBlock, FileId, Message, MessageId, Order,
	Role, Run, RunId, RunStatus, RunStep, StepDetails, ThreadApi, ThreadId,
	ToolCall,
};
use asst_watch::poller::{
	ArtifactRef, MessageRow, PollOutcome, Poller, PollerConfig, Renderer, RunRow,
	StopWhen, WatchTarget,
};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

// region:    --- Fake ThreadApi

#[derive(Clone)]
enum Scripted {
	Runs(Vec<Run>),
	Fail,
}

/// Runs follow a script, one entry per `list_runs` call; the last entry repeats.
#[derive(Default)]
struct FakeApi {
	run_script: Mutex<VecDeque<Scripted>>,
	/// Oldest first.
	messages: Vec<Message>,
	files: HashMap<FileId, Vec<u8>>,
	steps: Vec<RunStep>,
	run_calls: AtomicUsize,
	file_calls: AtomicUsize,
}

impl FakeApi {
	fn with_runs(script: Vec<Scripted>) -> Self {
		Self {
			run_script: Mutex::new(script.into()),
			..Default::default()
		}
	}
}

#[async_trait]
impl ThreadApi for FakeApi {
	async fn list_runs(
		&self,
		_thread_id: &ThreadId,
		_order: Order,
	) -> asst_watch::Result<Vec<Run>> {
		self.run_calls.fetch_add(1, Ordering::SeqCst);

		let next = {
			let mut script = self.run_script.lock().unwrap();
			if script.len() > 1 {
				script.pop_front()
			} else {
				script.front().cloned()
			}
		};

		match next {
			Some(Scripted::Runs(runs)) => Ok(runs),
			Some(Scripted::Fail) => Err(asst_watch::Error::IO(io::Error::new(
				io::ErrorKind::TimedOut,
				"simulated timeout",
			))),
			None => Ok(Vec::new()),
		}
	}

	async fn list_messages(
		&self,
		_thread_id: &ThreadId,
		order: Order,
	) -> asst_watch::Result<Vec<Message>> {
		let mut msgs = self.messages.clone();
		if order == Order::Desc {
			msgs.reverse();
		}
		Ok(msgs)
	}

	async fn list_run_steps(
		&self,
		_thread_id: &ThreadId,
		_run_id: &RunId,
		_order: Order,
	) -> asst_watch::Result<Vec<RunStep>> {
		Ok(self.steps.clone())
	}

	async fn file_content(&self, file_id: &FileId) -> asst_watch::Result<Vec<u8>> {
		self.file_calls.fetch_add(1, Ordering::SeqCst);

		self.files.get(file_id).cloned().ok_or_else(|| {
			asst_watch::Error::FileContentRequestFailed {
				file_id: file_id.to_string(),
				status: 404,
			}
		})
	}
}

// endregion: --- Fake ThreadApi

// region:    --- Recording Renderer

#[derive(Debug, Clone, PartialEq)]
enum Rendered {
	Runs(Vec<RunRow>),
	Messages(Vec<MessageRow>),
	Message(String),
	Steps(usize),
	Saved(String),
	SaveFailed(String),
	PollFailed(u32),
}

#[derive(Default)]
struct RecordingRenderer {
	log: Mutex<Vec<Rendered>>,
}

impl RecordingRenderer {
	fn take(&self) -> Vec<Rendered> {
		self.log.lock().unwrap().clone()
	}

	fn run_statuses(&self) -> Vec<String> {
		self.take()
			.into_iter()
			.filter_map(|r| match r {
				Rendered::Runs(rows) => rows.first().map(|row| row.status.clone()),
				_ => None,
			})
			.collect()
	}

	fn push(&self, rendered: Rendered) {
		self.log.lock().unwrap().push(rendered);
	}
}

impl Renderer for RecordingRenderer {
	fn runs(&self, rows: &[RunRow]) {
		self.push(Rendered::Runs(rows.to_vec()));
	}

	fn messages(&self, rows: &[MessageRow]) {
		self.push(Rendered::Messages(rows.to_vec()));
	}

	fn message(&self, msg: &Message) {
		self.push(Rendered::Message(msg.id.to_string()));
	}

	fn run_steps(&self, steps: &[RunStep]) {
		self.push(Rendered::Steps(steps.len()));
	}

	fn artifact_saved(&self, artifact: &ArtifactRef, _file: &Path) {
		self.push(Rendered::Saved(artifact.suggested_name.clone()));
	}

	fn artifact_failed(&self, artifact: &ArtifactRef, _cause: &str) {
		self.push(Rendered::SaveFailed(artifact.suggested_name.clone()));
	}

	fn poll_failed(&self, _cause: &str, consecutive: u32) {
		self.push(Rendered::PollFailed(consecutive));
	}
}

// endregion: --- Recording Renderer

// region:    --- Fixtures

fn thread_id() -> ThreadId {
	ThreadId::new("thread_test").unwrap()
}

fn run(id: &str, status: RunStatus, created_at: i64) -> Run {
	let started_at = match status {
		RunStatus::Queued => None,
		_ => Some(created_at + 1),
	};
	Run {
		id: RunId::new(id).unwrap(),
		thread_id: thread_id(),
		status,
		created_at,
		started_at,
		expires_at: None,
		completed_at: None,
		failed_at: None,
		cancelled_at: None,
		last_error: None,
	}
}

fn text_msg(id: &str, created_at: i64, annotations: Vec<(&str, &str)>) -> Message {
	Message {
		id: MessageId::from(id.to_string()),
		thread_id: thread_id(),
		role: Role::Assistant,
		content: vec![ContentBlock::Text {
			value: format!("message {id}"),
			annotations: annotations
				.into_iter()
				.map(|(text, file_id)| Annotation {
					kind: AnnotationKind::FilePath,
					text: text.to_string(),
					file_id: file_id.into(),
				})
				.collect(),
		}],
		created_at,
		run_id: None,
	}
}

fn fast_config(downloads_dir: &Path) -> PollerConfig {
	PollerConfig {
		interval_ms: 1,
		max_consecutive_failures: 3,
		downloads_dir: downloads_dir.to_path_buf(),
		stop: StopWhen::RunTerminal,
	}
}

fn new_poller(
	api: Arc<FakeApi>,
	renderer: Arc<RecordingRenderer>,
	config: PollerConfig,
) -> Poller {
	Poller::new(api, renderer, thread_id(), config)
}

// endregion: --- Fixtures

// region:    --- Watch Runs

#[tokio::test]
async fn test_watch_runs_queued_in_progress_completed() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi::with_runs(vec![
		Scripted::Runs(vec![run("run_1", RunStatus::Queued, 100)]),
		Scripted::Runs(vec![run("run_1", RunStatus::InProgress, 100)]),
		Scripted::Runs(vec![run("run_1", RunStatus::Completed, 100)]),
	]));
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api.clone(), renderer.clone(), fast_config(dir.path()));

	// -- Exec
	let outcome = poller
		.watch(WatchTarget::Runs, &CancellationToken::new())
		.await?;

	// -- Check
	let PollOutcome::Finished(done) = outcome else {
		return Err("watch should finish on completed".into());
	};
	assert_eq!(done.status, RunStatus::Completed);
	assert_eq!(
		renderer.run_statuses(),
		vec!["queued", "in_progress", "completed"]
	);
	assert_eq!(api.run_calls.load(Ordering::SeqCst), 3);

	Ok(())
}

#[tokio::test]
async fn test_watch_runs_renders_unchanged_snapshot_once() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi::with_runs(vec![
		Scripted::Runs(vec![run("run_1", RunStatus::Queued, 100)]),
		Scripted::Runs(vec![run("run_1", RunStatus::Queued, 100)]),
		Scripted::Runs(vec![run("run_1", RunStatus::Failed, 100)]),
	]));
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api.clone(), renderer.clone(), fast_config(dir.path()));

	// -- Exec
	let outcome = poller
		.watch(WatchTarget::Runs, &CancellationToken::new())
		.await?;

	// -- Check
	assert!(matches!(outcome, PollOutcome::Finished(ref r) if r.status == RunStatus::Failed));
	assert_eq!(renderer.run_statuses(), vec!["queued", "failed"]);
	assert_eq!(api.run_calls.load(Ordering::SeqCst), 3);

	Ok(())
}

#[tokio::test]
async fn test_watch_runs_not_started_renders_placeholder() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi::with_runs(vec![Scripted::Runs(vec![run(
		"run_1",
		RunStatus::Queued,
		100,
	)])]));
	let renderer = Arc::new(RecordingRenderer::default());
	let poller = new_poller(api, renderer.clone(), fast_config(dir.path()));

	// -- Exec
	poller.poll_runs().await?;

	// -- Check
	let rendered = renderer.take();
	let Some(Rendered::Runs(rows)) = rendered.first() else {
		return Err("runs should be rendered".into());
	};
	assert_eq!(rows[0].started_at, "—");
	assert_eq!(rows[0].expires_at, "—");

	Ok(())
}

#[tokio::test]
async fn test_watch_runs_follows_given_run() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	// newest first: run_2 still in progress, run_1 (watched) completed
	let api = Arc::new(FakeApi::with_runs(vec![
		Scripted::Runs(vec![
			run("run_2", RunStatus::InProgress, 200),
			run("run_1", RunStatus::InProgress, 100),
		]),
		Scripted::Runs(vec![
			run("run_2", RunStatus::InProgress, 200),
			run("run_1", RunStatus::Completed, 100),
		]),
	]));
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api, renderer, fast_config(dir.path()))
		.with_run(RunId::new("run_1")?);

	// -- Exec
	let outcome = poller
		.watch(WatchTarget::Runs, &CancellationToken::new())
		.await?;

	// -- Check
	let PollOutcome::Finished(done) = outcome else {
		return Err("watch should finish".into());
	};
	assert_eq!(done.id.as_str(), "run_1");

	Ok(())
}

// endregion: --- Watch Runs

// region:    --- Failures & Cancellation

#[tokio::test]
async fn test_watch_gives_up_after_consecutive_failures() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi::with_runs(vec![Scripted::Fail]));
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api.clone(), renderer.clone(), fast_config(dir.path()));

	// -- Exec
	let res = poller
		.watch(WatchTarget::Runs, &CancellationToken::new())
		.await;

	// -- Check
	assert!(matches!(
		res,
		Err(asst_watch::Error::PollFailedTooManyTimes { failures: 3, .. })
	));
	assert_eq!(
		renderer.take(),
		vec![
			Rendered::PollFailed(1),
			Rendered::PollFailed(2),
			Rendered::PollFailed(3)
		]
	);

	Ok(())
}

#[tokio::test]
async fn test_watch_failure_count_resets_on_success() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi::with_runs(vec![
		Scripted::Fail,
		Scripted::Fail,
		Scripted::Runs(vec![run("run_1", RunStatus::InProgress, 100)]),
		Scripted::Fail,
		Scripted::Fail,
		Scripted::Runs(vec![run("run_1", RunStatus::Completed, 100)]),
	]));
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api, renderer.clone(), fast_config(dir.path()));

	// -- Exec
	let outcome = poller
		.watch(WatchTarget::Runs, &CancellationToken::new())
		.await?;

	// -- Check
	assert!(matches!(outcome, PollOutcome::Finished(_)));
	let failures: Vec<Rendered> = renderer
		.take()
		.into_iter()
		.filter(|r| matches!(r, Rendered::PollFailed(_)))
		.collect();
	assert_eq!(
		failures,
		vec![
			Rendered::PollFailed(1),
			Rendered::PollFailed(2),
			Rendered::PollFailed(1),
			Rendered::PollFailed(2)
		]
	);

	Ok(())
}

#[tokio::test]
async fn test_watch_unknown_run_counts_as_failure() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi::with_runs(vec![Scripted::Runs(vec![run(
		"run_1",
		RunStatus::Completed,
		100,
	)])]));
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api.clone(), renderer.clone(), fast_config(dir.path()))
		.with_run(RunId::new("run_unknown")?);

	// -- Exec
	let res = tokio::time::timeout(
		Duration::from_secs(5),
		poller.watch(WatchTarget::Runs, &CancellationToken::new()),
	)
	.await?;

	// -- Check
	let Err(asst_watch::Error::PollFailedTooManyTimes {
		failures,
		last_cause,
	}) = res
	else {
		return Err("unknown run should end the watch with an error".into());
	};
	assert_eq!(failures, 3);
	assert!(last_cause.contains("run_unknown"));
	assert_eq!(api.run_calls.load(Ordering::SeqCst), 3);
	let failed: Vec<Rendered> = renderer
		.take()
		.into_iter()
		.filter(|r| matches!(r, Rendered::PollFailed(_)))
		.collect();
	assert_eq!(
		failed,
		vec![
			Rendered::PollFailed(1),
			Rendered::PollFailed(2),
			Rendered::PollFailed(3)
		]
	);

	Ok(())
}

#[tokio::test]
async fn test_watch_cancelled_before_start_fetches_nothing() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi::with_runs(vec![Scripted::Runs(vec![run(
		"run_1",
		RunStatus::InProgress,
		100,
	)])]));
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api.clone(), renderer, fast_config(dir.path()));
	let cancel = CancellationToken::new();
	cancel.cancel();

	// -- Exec
	let outcome = poller.watch(WatchTarget::Runs, &cancel).await?;

	// -- Check
	assert_eq!(outcome, PollOutcome::Cancelled);
	assert_eq!(api.run_calls.load(Ordering::SeqCst), 0);

	Ok(())
}

#[tokio::test]
async fn test_spawned_watch_cancelled_while_sleeping() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi::with_runs(vec![Scripted::Runs(vec![run(
		"run_1",
		RunStatus::InProgress,
		100,
	)])]));
	let renderer = Arc::new(RecordingRenderer::default());
	let mut config = fast_config(dir.path());
	config.interval_ms = 60_000;
	config.stop = StopWhen::Never;
	let poller = new_poller(api.clone(), renderer, config);

	// -- Exec
	let handle = poller.spawn(WatchTarget::Runs, CancellationToken::new());
	tokio::time::sleep(Duration::from_millis(50)).await;
	handle.cancel();
	let outcome = tokio::time::timeout(Duration::from_secs(5), handle.join()).await??;

	// -- Check
	assert_eq!(outcome, PollOutcome::Cancelled);
	assert_eq!(api.run_calls.load(Ordering::SeqCst), 1);

	Ok(())
}

// endregion: --- Failures & Cancellation

// region:    --- Messages & Materialization

#[tokio::test]
async fn test_poll_messages_orders_are_reversed() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi {
		messages: vec![
			text_msg("msg_1", 1, vec![]),
			text_msg("msg_2", 2, vec![]),
			text_msg("msg_3", 3, vec![]),
		],
		..Default::default()
	});
	let renderer = Arc::new(RecordingRenderer::default());
	let poller = new_poller(api, renderer, fast_config(dir.path()));

	// -- Exec
	let asc = poller.poll_messages(Order::Asc).await?;
	let mut desc = poller.poll_messages(Order::Desc).await?;

	// -- Check
	assert_eq!(asc.len(), 3);
	desc.reverse();
	assert_eq!(asc, desc);

	Ok(())
}

#[tokio::test]
async fn test_materialize_twice_same_content() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let downloads = dir.path().join("downloads");
	let api = Arc::new(FakeApi {
		files: HashMap::from([(FileId::from("file-a"), b"zip bytes".to_vec())]),
		..Default::default()
	});
	let renderer = Arc::new(RecordingRenderer::default());
	let poller = new_poller(api, renderer, fast_config(&downloads));
	let artifact = ArtifactRef {
		file_id: "file-a".into(),
		suggested_name: "site.zip".to_string(),
	};

	// -- Exec
	let first = poller.materialize(&artifact).await?;
	let first_content = std::fs::read(&first)?;
	let second = poller.materialize(&artifact).await?;
	let second_content = std::fs::read(&second)?;

	// -- Check
	assert_eq!(first, downloads.join("site.zip"));
	assert_eq!(first, second);
	assert_eq!(first_content, b"zip bytes".to_vec());
	assert_eq!(first_content, second_content);
	assert!(!downloads.join("site.zip.part").exists());

	Ok(())
}

#[tokio::test]
async fn test_status_pass_same_file_two_names() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi {
		messages: vec![text_msg(
			"msg_1",
			1,
			vec![
				("sandbox:/mnt/data/report.csv", "file-r"),
				("sandbox:/mnt/data/report-copy.csv", "file-r"),
			],
		)],
		files: HashMap::from([(FileId::from("file-r"), b"a,b\n1,2\n".to_vec())]),
		..Default::default()
	});
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api, renderer, fast_config(dir.path()));

	// -- Exec
	let saved = poller.status_pass().await?;

	// -- Check
	let expected: Vec<PathBuf> = vec![
		dir.path().join("report.csv"),
		dir.path().join("report-copy.csv"),
	];
	assert_eq!(saved, expected);
	assert_eq!(std::fs::read(&saved[0])?, std::fs::read(&saved[1])?);

	Ok(())
}

#[tokio::test]
async fn test_status_pass_without_annotations_downloads_nothing() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let downloads = dir.path().join("downloads");
	let api = Arc::new(FakeApi {
		messages: vec![text_msg("msg_1", 1, vec![]), text_msg("msg_2", 2, vec![])],
		..Default::default()
	});
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api.clone(), renderer.clone(), fast_config(&downloads));

	// -- Exec
	let saved = poller.status_pass().await?;

	// -- Check
	assert!(saved.is_empty());
	assert_eq!(api.file_calls.load(Ordering::SeqCst), 0);
	assert!(!downloads.exists());
	assert_eq!(
		renderer.take(),
		vec![
			Rendered::Message("msg_1".to_string()),
			Rendered::Message("msg_2".to_string())
		]
	);

	Ok(())
}

#[tokio::test]
async fn test_status_pass_repeated_downloads_once() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi {
		messages: vec![text_msg("msg_1", 1, vec![("sandbox:/mnt/data/site.zip", "file-s")])],
		files: HashMap::from([(FileId::from("file-s"), b"zip".to_vec())]),
		..Default::default()
	});
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api.clone(), renderer, fast_config(dir.path()));

	// -- Exec
	let first = poller.status_pass().await?;
	poller.set_run(Some(RunId::new("run_2")?));
	let second = poller.status_pass().await?;

	// -- Check
	assert_eq!(first, vec![dir.path().join("site.zip")]);
	assert!(second.is_empty());
	assert_eq!(api.file_calls.load(Ordering::SeqCst), 1);

	Ok(())
}

#[tokio::test]
async fn test_watch_messages_materializes_each_occurrence_once() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi {
		run_script: Mutex::new(
			vec![
				Scripted::Runs(vec![run("run_1", RunStatus::InProgress, 100)]),
				Scripted::Runs(vec![run("run_1", RunStatus::InProgress, 100)]),
				Scripted::Runs(vec![run("run_1", RunStatus::Completed, 100)]),
			]
			.into(),
		),
		messages: vec![text_msg("msg_1", 1, vec![("out/plot.png", "file-p")])],
		files: HashMap::from([(FileId::from("file-p"), vec![1, 2, 3])]),
		..Default::default()
	});
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api.clone(), renderer.clone(), fast_config(dir.path()));

	// -- Exec
	let outcome = poller
		.watch(WatchTarget::Messages(Order::Desc), &CancellationToken::new())
		.await?;

	// -- Check
	assert!(matches!(outcome, PollOutcome::Finished(_)));
	assert_eq!(api.file_calls.load(Ordering::SeqCst), 1);
	let rendered = renderer.take();
	let messages_renders = rendered
		.iter()
		.filter(|r| matches!(r, Rendered::Messages(_)))
		.count();
	assert_eq!(messages_renders, 1);
	assert!(rendered.contains(&Rendered::Saved("plot.png".to_string())));
	assert_eq!(std::fs::read(dir.path().join("plot.png"))?, vec![1, 2, 3]);

	Ok(())
}

#[tokio::test]
async fn test_watch_messages_download_failure_does_not_abort() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi {
		run_script: Mutex::new(
			vec![
				Scripted::Runs(vec![run("run_1", RunStatus::InProgress, 100)]),
				Scripted::Runs(vec![run("run_1", RunStatus::Completed, 100)]),
			]
			.into(),
		),
		messages: vec![text_msg("msg_1", 1, vec![("gone.zip", "file-missing")])],
		..Default::default()
	});
	let renderer = Arc::new(RecordingRenderer::default());
	let mut poller = new_poller(api.clone(), renderer.clone(), fast_config(dir.path()));

	// -- Exec
	let outcome = poller
		.watch(WatchTarget::Messages(Order::Asc), &CancellationToken::new())
		.await?;

	// -- Check
	assert!(matches!(outcome, PollOutcome::Finished(_)));
	// retried on each cycle since it never succeeded
	assert_eq!(api.file_calls.load(Ordering::SeqCst), 2);
	let failed = renderer
		.take()
		.into_iter()
		.filter(|r| *r == Rendered::SaveFailed("gone.zip".to_string()))
		.count();
	assert_eq!(failed, 2);

	Ok(())
}

// endregion: --- Messages & Materialization

// region:    --- Run Steps

#[tokio::test]
async fn test_run_steps_rendered() -> Result<()> {
	// -- Setup & Fixtures
	let dir = tempfile::tempdir()?;
	let api = Arc::new(FakeApi {
		steps: vec![RunStep {
			id: "step_1".to_string(),
			run_id: RunId::new("run_1")?,
			status: "completed".to_string(),
			details: StepDetails::ToolCalls(vec![ToolCall::CodeInterpreter {
				input: "print(2)".to_string(),
				logs: vec!["2".to_string()],
			}]),
		}],
		..Default::default()
	});
	let renderer = Arc::new(RecordingRenderer::default());
	let poller = new_poller(api, renderer.clone(), fast_config(dir.path()));

	// -- Exec
	let steps = poller.run_steps(&RunId::new("run_1")?, Order::Asc).await?;

	// -- Check
	assert_eq!(steps.len(), 1);
	assert_eq!(renderer.take(), vec![Rendered::Steps(1)]);

	Ok(())
}

// endregion: --- Run Steps

#[test]
fn test_empty_thread_id_is_fatal() {
	assert!(matches!(
		ThreadId::new(""),
		Err(asst_watch::Error::InvalidThreadId(_))
	));
}
