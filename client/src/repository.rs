//! Network-facing repository: executes the requests built by `TodoApi`.

use uuid::Uuid;

use crate::client::TodoApi;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo, TodoPage};

/// Synchronous repository over the todo API.
///
/// Wraps a `TodoApi` with a ureq agent configured to return 4xx/5xx
/// responses as data, so status interpretation stays in the parse layer.
pub struct TodoRepository {
    api: TodoApi,
    agent: ureq::Agent,
}

impl TodoRepository {
    pub fn new(base_url: &str) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            api: TodoApi::new(base_url),
            agent,
        }
    }

    pub fn get(&self, page: Option<usize>, limit: Option<usize>) -> Result<TodoPage, ApiError> {
        let req = self.api.build_list_todos(page, limit);
        self.api.parse_list_todos(self.execute(req)?)
    }

    pub fn create_by_content(&self, content: &str) -> Result<Todo, ApiError> {
        let input = CreateTodo {
            content: content.to_string(),
        };
        let req = self.api.build_create_todo(&input)?;
        self.api.parse_create_todo(self.execute(req)?)
    }

    pub fn toggle_done(&self, id: Uuid) -> Result<Todo, ApiError> {
        let req = self.api.build_toggle_done(id);
        self.api.parse_toggle_done(self.execute(req)?)
    }

    pub fn delete_by_id(&self, id: Uuid) -> Result<(), ApiError> {
        let req = self.api.build_delete_todo(id);
        self.api.parse_delete_todo(self.execute(req)?)
    }

    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let result = match (req.method, req.body) {
            (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&req.path)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
        };

        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string().unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}
