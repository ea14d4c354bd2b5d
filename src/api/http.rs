//! ureq-backed implementation of [`TaskApi`]

use ureq::{Agent, AgentBuilder};
use url::Url;

use super::TaskApi;
use crate::config::ApiConfig;
use crate::error::{Result, TaskDeckError};
use crate::model::{NewTask, Task, TaskId};

const COLLECTION_SEGMENT: &str = "tasks";

/// HTTP client for a `/tasks` collection resource
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    agent: Agent,
    collection: Url,
}

impl HttpTaskApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder =
            AgentBuilder::new().user_agent(concat!("taskdeck/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            agent: builder.build(),
            collection: collection_url(&config.base_url)?,
        })
    }

    /// Full URL of the collection, e.g. `http://localhost:3000/tasks`
    pub fn collection_url(&self) -> &str {
        self.collection.as_str()
    }

    fn item_url(&self, id: &TaskId) -> Result<Url> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| TaskDeckError::config("api url cannot carry a path"))?
            .push(id.as_str());
        Ok(url)
    }
}

/// `{base}/tasks`; a base that already ends in `/tasks` is used as-is
fn collection_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| TaskDeckError::config(format!("invalid api url '{}': {}", base_url, e)))?;

    // 去掉结尾的空段，否则拼接 id 时会得到 `/tasks//{id}`
    url.path_segments_mut()
        .map_err(|_| TaskDeckError::config("api url cannot carry a path"))?
        .pop_if_empty();

    let already_collection =
        url.path_segments().and_then(|mut segments| segments.next_back()) == Some(COLLECTION_SEGMENT);

    if !already_collection {
        url.path_segments_mut()
            .map_err(|_| TaskDeckError::config("api url cannot carry a path"))?
            .push(COLLECTION_SEGMENT);
    }

    Ok(url)
}

impl TaskApi for HttpTaskApi {
    fn list_tasks(&self) -> Result<Vec<Task>> {
        let response = self.agent.get(self.collection.as_str()).call()?;
        response
            .into_json::<Vec<Task>>()
            .map_err(|e| TaskDeckError::decode(e.to_string()))
    }

    fn create_task(&self, task: &NewTask) -> Result<()> {
        self.agent.post(self.collection.as_str()).send_json(task)?;
        Ok(())
    }

    fn toggle_task(&self, id: &TaskId) -> Result<()> {
        let url = self.item_url(id)?;
        self.agent.put(url.as_str()).call()?;
        Ok(())
    }

    fn delete_task(&self, id: &TaskId) -> Result<()> {
        let url = self.item_url(id)?;
        self.agent.delete(url.as_str()).call()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server;

    fn api_for(base_url: &str) -> HttpTaskApi {
        HttpTaskApi::new(&ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    #[test]
    fn test_collection_url() {
        assert_eq!(
            api_for("http://localhost:3000").collection_url(),
            "http://localhost:3000/tasks"
        );
        assert_eq!(
            api_for("http://localhost:3000/").collection_url(),
            "http://localhost:3000/tasks"
        );
        assert_eq!(
            api_for("https://todo.example.com/api/v1").collection_url(),
            "https://todo.example.com/api/v1/tasks"
        );
        assert_eq!(
            api_for("https://todo-backend.example.com/tasks").collection_url(),
            "https://todo-backend.example.com/tasks"
        );
        assert_eq!(
            api_for("https://todo-backend.example.com/tasks/").collection_url(),
            "https://todo-backend.example.com/tasks"
        );
    }

    #[test]
    fn test_item_url_with_trailing_slash_base() {
        let api = api_for("http://localhost:3000/tasks/");
        assert_eq!(
            api.item_url(&TaskId::from(1)).unwrap().as_str(),
            "http://localhost:3000/tasks/1"
        );
    }

    #[test]
    fn test_item_url_encodes_id() {
        let api = api_for("http://localhost:3000");
        assert_eq!(
            api.item_url(&TaskId::from(42)).unwrap().as_str(),
            "http://localhost:3000/tasks/42"
        );
        assert_eq!(
            api.item_url(&TaskId::new("a b/c")).unwrap().as_str(),
            "http://localhost:3000/tasks/a%20b%2Fc"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpTaskApi::new(&ApiConfig {
            base_url: "::nope".to_string(),
            timeout_secs: None,
        })
        .unwrap_err();
        assert!(matches!(err, TaskDeckError::Config(_)));
    }

    #[test]
    fn test_full_cycle_against_dev_server() {
        let handle = server::spawn_for_test();
        let api = api_for(&handle.base_url());

        assert!(api.list_tasks().unwrap().is_empty());

        api.create_task(&NewTask::new("Buy milk")).unwrap();
        api.create_task(&NewTask::new("Write report")).unwrap();
        let tasks = api.list_tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Buy milk");
        assert!(tasks.iter().all(|t| !t.completed));

        api.toggle_task(&tasks[0].id).unwrap();
        let tasks = api.list_tasks().unwrap();
        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);

        api.delete_task(&tasks[1].id).unwrap();
        let tasks = api.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
    }

    #[test]
    fn test_unknown_id_maps_to_status() {
        let handle = server::spawn_for_test();
        let api = api_for(&handle.base_url());

        let err = api.toggle_task(&TaskId::from(999)).unwrap_err();
        assert!(matches!(err, TaskDeckError::Status { code: 404 }));

        let err = api.delete_task(&TaskId::from(999)).unwrap_err();
        assert!(matches!(err, TaskDeckError::Status { code: 404 }));
    }

    #[test]
    fn test_connection_refused_maps_to_transport() {
        // 先占用一个端口再释放，确保没有服务在监听
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let api = api_for(&format!("http://127.0.0.1:{}", port));

        let err = api.list_tasks().unwrap_err();
        assert!(matches!(err, TaskDeckError::Transport(_)));
        assert!(err.is_remote());
    }
}
