use crate::ais::step::StepList;
use crate::ais::{
	AisClient, FileId, Message, Order, Run, RunId, RunStep, ThreadId,
};
use crate::{Error, Result};
use async_openai::config::Config;
use async_trait::async_trait;

// region:    --- Constants

const PAGE_LIMIT: &str = "100";

// endregion: --- Constants

// region:    --- ThreadApi

/// Read side of the remote service, as needed by the poller.
///
/// `AisClient` is the production implementation. Tests provide in-memory fakes.
#[async_trait]
pub trait ThreadApi: Send + Sync {
	/// All runs of the thread, in `order` of creation.
	async fn list_runs(&self, thread_id: &ThreadId, order: Order) -> Result<Vec<Run>>;

	/// All messages of the thread, in `order` of creation.
	async fn list_messages(
		&self,
		thread_id: &ThreadId,
		order: Order,
	) -> Result<Vec<Message>>;

	async fn list_run_steps(
		&self,
		thread_id: &ThreadId,
		run_id: &RunId,
		order: Order,
	) -> Result<Vec<RunStep>>;

	/// Raw content of a file from the file store.
	async fn file_content(&self, file_id: &FileId) -> Result<Vec<u8>>;
}

// endregion: --- ThreadApi

// region:    --- AisClient Impl

#[async_trait]
impl ThreadApi for AisClient {
	async fn list_runs(&self, thread_id: &ThreadId, order: Order) -> Result<Vec<Run>> {
		let oa_threads = self.oa_client().threads();
		let oa_runs = oa_threads.runs(thread_id);

		let mut runs = Vec::new();
		let mut after: Option<String> = None;
		loop {
			let query = page_query(order, after.as_deref());
			let page = oa_runs.list(&query).await?;

			let last_id = page.data.last().map(|r| r.id.clone());
			let has_more = page.has_more;
			runs.extend(page.data.into_iter().map(Run::from));

			match (has_more, last_id) {
				(true, Some(last_id)) => after = Some(last_id),
				_ => break,
			}
		}

		Ok(runs)
	}

	async fn list_messages(
		&self,
		thread_id: &ThreadId,
		order: Order,
	) -> Result<Vec<Message>> {
		let oa_threads = self.oa_client().threads();
		let oa_msgs = oa_threads.messages(thread_id);

		let mut msgs = Vec::new();
		let mut after: Option<String> = None;
		loop {
			let query = page_query(order, after.as_deref());
			let page = oa_msgs.list(&query).await?;

			let last_id = page.data.last().map(|m| m.id.clone());
			let has_more = page.has_more;
			msgs.extend(page.data.into_iter().map(Message::from));

			match (has_more, last_id) {
				(true, Some(last_id)) => after = Some(last_id),
				_ => break,
			}
		}

		Ok(msgs)
	}

	async fn list_run_steps(
		&self,
		thread_id: &ThreadId,
		run_id: &RunId,
		order: Order,
	) -> Result<Vec<RunStep>> {
		let config = self.oa_config();
		let url = config.url(&format!("/threads/{thread_id}/runs/{run_id}/steps"));

		let mut steps = Vec::new();
		let mut after: Option<String> = None;
		loop {
			let query = page_query(order, after.as_deref());
			let res = self
				.http()
				.get(&url)
				.headers(config.headers())
				.query(&query)
				.send()
				.await?;

			let status = res.status();
			if !status.is_success() {
				return Err(Error::RunStepsRequestFailed {
					status: status.as_u16(),
					body: res.text().await.unwrap_or_default(),
				});
			}

			let page: StepList = serde_json::from_slice(&res.bytes().await?)
				.map_err(|err| Error::RunStepsParse(err.to_string()))?;
			let last_id = page.data.last().map(|s| s.id().to_string());
			steps.extend(page.data.into_iter().map(RunStep::from));

			match (page.has_more, last_id) {
				(true, Some(last_id)) => after = Some(last_id),
				_ => break,
			}
		}

		Ok(steps)
	}

	async fn file_content(&self, file_id: &FileId) -> Result<Vec<u8>> {
		let config = self.oa_config();
		let url = config.url(&format!("/files/{file_id}/content"));

		let res = self
			.http()
			.get(url)
			.headers(config.headers())
			.send()
			.await?;

		let status = res.status();
		if !status.is_success() {
			return Err(Error::FileContentRequestFailed {
				file_id: file_id.to_string(),
				status: status.as_u16(),
			});
		}

		Ok(res.bytes().await?.to_vec())
	}
}

// endregion: --- AisClient Impl

// region:    --- Support

fn page_query(order: Order, after: Option<&str>) -> Vec<(&'static str, &str)> {
	let mut query = vec![("order", order.as_query()), ("limit", PAGE_LIMIT)];
	if let Some(after) = after {
		query.push(("after", after));
	}
	query
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
