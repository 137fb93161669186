use std::time::Duration;

use log::{debug, error, warn};
use reqwest::{
    header::{CONTENT_TYPE, COOKIE, SET_COOKIE},
    Client, Response, Url,
};

use crate::{
    dto::{GraphQLRequest, GraphQLResponse, NoVariables},
    errors::AppError,
    gql::documents::{GetMe, Operation},
    models::UserLogin,
};

/// Client for the remote events API.
///
/// Carries no session of its own: the browser's cookie is passed with every
/// call and any `Set-Cookie` the API answers with is handed back to the
/// caller to relay.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub set_cookies: Vec<String>,
}

const CALENDAR_TYPE: &str = "text/calendar";

#[derive(Debug)]
pub struct Calendar {
    pub content_type: String,
    pub body: Vec<u8>,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AppError::from)?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path)
            .map_err(|err| AppError::transport(format!("invalid events API url: {err}")))
    }

    pub async fn execute<O: Operation>(
        &self,
        cookie: Option<&str>,
        variables: &O::Variables,
    ) -> Result<ApiResponse<O::ResponseData>, AppError> {
        let document = O::document()?;
        let body = GraphQLRequest {
            query: document.query_text(),
            operation_name: document.name,
            variables,
        };
        debug!("graphql {:?} {} -> {}", document.kind, document.name, self.base_url);

        let mut request = self.client.post(self.endpoint("graphql")?).json(&body);
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }
        let response = request.send().await.map_err(|err| {
            error!("[{:} : {:}] graphql {} failed: {:?}", file!(), line!(), document.name, err);
            AppError::from(err)
        })?;

        let set_cookies = set_cookies(&response);
        let status = response.status();
        let bytes = response.bytes().await?;

        let envelope: GraphQLResponse<O::ResponseData> = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                warn!("graphql {} answered with {}", document.name, status);
                return Err(AppError::transport(format!(
                    "events API responded with {status}"
                )));
            }
            Err(err) => {
                warn!("graphql {} response did not decode: {}", document.name, err);
                return Err(AppError::decode(err.to_string()));
            }
        };

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let message = errors
                .into_iter()
                .map(|err| err.message)
                .collect::<Vec<_>>()
                .join("; ");
            warn!("graphql {} returned errors: {}", document.name, message);
            return Err(AppError::Api { message });
        }

        match envelope.data {
            Some(data) => Ok(ApiResponse { data, set_cookies }),
            None => Err(AppError::decode(format!(
                "{} returned neither data nor errors",
                document.name
            ))),
        }
    }

    /// The user the given cookie belongs to, if any.
    pub async fn me(&self, cookie: Option<&str>) -> Result<Option<UserLogin>, AppError> {
        let response = self.execute::<GetMe>(cookie, &NoVariables {}).await?;
        Ok(response.data.me)
    }

    pub async fn calendar(&self, name: &str) -> Result<Calendar, AppError> {
        let url = self.endpoint(&format!("calendar/{name}.ics"))?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(if status == reqwest::StatusCode::NOT_FOUND {
                AppError::not_found(format!("No calendar named {name}"))
            } else {
                AppError::transport(format!("events API responded with {status}"))
            });
        }
        // Some servers label the export as plain text; browsers need the
        // calendar type to offer it to a calendar app.
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .filter(|value| value.starts_with(CALENDAR_TYPE))
            .unwrap_or(CALENDAR_TYPE)
            .to_string();
        let body = response.bytes().await?.to_vec();
        Ok(Calendar { content_type, body })
    }
}

fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::{
        dto::{FriendDto, GetEventVariables, LoginDto},
        gql::documents::{AddFriend, GetEvent, GetEvents, Login, GET_EVENTS},
    };

    fn client_for(server: &MockServer) -> ApiClient {
        let url = Url::parse(&format!("{}/", server.uri())).unwrap();
        ApiClient::new(url, Duration::from_secs(5)).unwrap()
    }

    #[actix_rt::test]
    async fn execute_sends_operation_and_decodes_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(json!({
                "operationName": "getEvent",
                "variables": { "eventId": 7 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "event": {
                    "id": 7,
                    "title": "Picnic",
                    "description": "Bring food",
                    "tags": ["outdoor", "food"],
                    "owner": { "username": "alice" }
                }}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let res = client_for(&server)
            .execute::<GetEvent>(None, &GetEventVariables { event_id: 7 })
            .await
            .unwrap();
        let event = res.data.event.unwrap();
        assert_eq!(event.title, "Picnic");
        assert_eq!(event.tags, vec!["outdoor", "food"]);
        assert_eq!(event.owner.username, "alice");
    }

    #[actix_rt::test]
    async fn query_text_includes_fragment() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(json!({
                "query": GET_EVENTS.query_text()
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "events": [] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let res = client_for(&server)
            .execute::<GetEvents>(None, &NoVariables {})
            .await
            .unwrap();
        assert!(res.data.events.is_empty());
    }

    #[actix_rt::test]
    async fn graphql_errors_become_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [
                    { "message": "User not found" },
                    { "message": "Try again" }
                ]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .execute::<AddFriend>(None, &FriendDto { username: "bob".into() })
            .await
            .unwrap_err();
        assert_eq!(
            err,
            AppError::Api { message: "User not found; Try again".into() }
        );
    }

    #[actix_rt::test]
    async fn forwards_cookie_and_collects_set_cookie() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("cookie", "session=abc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=def; Path=/; HttpOnly")
                    .set_body_json(json!({
                        "data": { "login": { "username": "alice", "email": "a@example.com" } }
                    })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let res = client_for(&server)
            .execute::<Login>(
                Some("session=abc"),
                &LoginDto { username: "alice".into(), password: "pw".into() },
            )
            .await
            .unwrap();
        assert_eq!(res.data.login.unwrap().username, "alice");
        assert_eq!(res.set_cookies, vec!["session=def; Path=/; HttpOnly"]);
    }

    #[actix_rt::test]
    async fn shape_mismatch_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "events": [{ "id": "not a number" }] }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .execute::<GetEvents>(None, &NoVariables {})
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));
    }

    #[actix_rt::test]
    async fn server_failure_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server).me(None).await.unwrap_err();
        assert_eq!(
            err,
            AppError::transport("events API responded with 500 Internal Server Error")
        );
    }

    #[actix_rt::test]
    async fn me_is_none_for_anonymous_cookie() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(body_partial_json(json!({ "operationName": "getMe" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "me": null }
            })))
            .mount(&server)
            .await;

        assert_eq!(client_for(&server).me(None).await.unwrap(), None);
    }

    #[actix_rt::test]
    async fn calendar_is_fetched_from_api() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/global.ics"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(
                    "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n",
                    "text/calendar; charset=utf-8",
                ),
            )
            .mount(&server)
            .await;

        let calendar = client_for(&server).calendar("global").await.unwrap();
        assert_eq!(calendar.content_type, "text/calendar; charset=utf-8");
        assert!(calendar.body.starts_with(b"BEGIN:VCALENDAR"));
    }

    #[actix_rt::test]
    async fn calendar_labelled_as_text_gets_calendar_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/global.ics"))
            .respond_with(ResponseTemplate::new(200).set_body_string("BEGIN:VCALENDAR\r\n"))
            .mount(&server)
            .await;

        let calendar = client_for(&server).calendar("global").await.unwrap();
        assert_eq!(calendar.content_type, "text/calendar");
    }

    #[actix_rt::test]
    async fn missing_calendar_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/private.ics"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server).calendar("private").await.unwrap_err();
        assert_eq!(err, AppError::not_found("No calendar named private"));
    }
}
