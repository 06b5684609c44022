use std::collections::HashMap;
use std::time::Duration;

use serde_json::{json, Value};

use crate::error::AppError;
use crate::models::color::ColorPoint;
use crate::models::light::{Light, LightAttributes};

const ERR_UNAUTHORIZED_USER: i32 = 1;

/// Client for the Hue local REST API. Discovery and token pairing are not
/// handled here; the address and token come from the credential file.
#[derive(Debug)]
pub struct HueBridge {
    client: reqwest::Client,
    base_url: String,
    token: String,
    verbose: bool,
}

fn build_http_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .build()?)
}

impl HueBridge {
    /// Verify the bridge is reachable at `addr` and return an
    /// unauthenticated handle.
    pub async fn connect(addr: &str, verbose: bool) -> Result<Self, AppError> {
        if addr.is_empty() {
            return Err(AppError::BridgeConnect(
                "no bridge address configured".into(),
            ));
        }

        let bridge = Self {
            client: build_http_client()?,
            base_url: format!("http://{}", addr),
            token: String::new(),
            verbose,
        };

        // /api/config answers without a token, which makes it a clean
        // reachability probe.
        bridge.get("/api/config").await.map_err(|err| match err {
            AppError::Http(err) => AppError::BridgeConnect(err.to_string()),
            other => other,
        })?;

        Ok(bridge)
    }

    /// Validate the token against the lights endpoint and store it for
    /// subsequent requests.
    pub async fn authenticate(&mut self, token: &str) -> Result<(), AppError> {
        self.token = token.to_string();
        let body = self.get(&format!("/api/{}/lights", self.token)).await?;
        match check_api_error(&body) {
            Err(AppError::Bridge {
                message,
                error_type: Some(ERR_UNAUTHORIZED_USER),
            }) => Err(AppError::BridgeAuth(message)),
            other => other,
        }
    }

    /// List all lights in the bridge's enumeration order. Light ids are
    /// decimal strings, so numeric id order is the native order.
    pub async fn get_all_lights(&self) -> Result<Vec<Light>, AppError> {
        let body = self.get(&format!("/api/{}/lights", self.token)).await?;
        check_api_error(&body)?;

        let map: HashMap<String, LightAttributes> = serde_json::from_value(body)?;
        let mut lights: Vec<Light> = map
            .into_iter()
            .map(|(id, attributes)| Light::from_attributes(id, attributes))
            .collect();
        lights.sort_by_key(|light| light.id.parse::<u32>().unwrap_or(u32::MAX));
        Ok(lights)
    }

    pub async fn power_on(&self, light: &Light) -> Result<(), AppError> {
        self.set_state(light, &json!({"on": true})).await
    }

    pub async fn power_off(&self, light: &Light) -> Result<(), AppError> {
        self.set_state(light, &json!({"on": false})).await
    }

    pub async fn set_color(&self, light: &Light, color: ColorPoint) -> Result<(), AppError> {
        self.set_state(light, &json!({"on": true, "xy": color})).await
    }

    /// `percent` is 0-100; the wire field `bri` is 0-254.
    pub async fn set_brightness(&self, light: &Light, percent: u8) -> Result<(), AppError> {
        let bri = (u16::from(percent) * 254 / 100) as u8;
        self.set_state(light, &json!({"on": true, "bri": bri})).await
    }

    async fn set_state(&self, light: &Light, state: &Value) -> Result<(), AppError> {
        let url = format!(
            "{}/api/{}/lights/{}/state",
            self.base_url, self.token, light.id
        );

        if self.verbose {
            eprintln!("PUT {}", url);
            eprintln!("Body: {}", state);
        }

        let response = self.client.put(&url).json(state).send().await?;
        let body = read_json(response, self.verbose).await?;
        check_api_error(&body)
    }

    async fn get(&self, path: &str) -> Result<Value, AppError> {
        let url = format!("{}{}", self.base_url, path);

        if self.verbose {
            eprintln!("GET {}", url);
        }

        let response = self.client.get(&url).send().await?;
        read_json(response, self.verbose).await
    }
}

async fn read_json(response: reqwest::Response, verbose: bool) -> Result<Value, AppError> {
    if response.status().is_success() {
        let body: Value = response.json().await?;
        if verbose {
            eprintln!("Response: {}", body);
        }
        Ok(body)
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Err(AppError::Bridge {
            message: format!("{}: {}", status, text),
            error_type: None,
        })
    }
}

/// The bridge reports failures as an array of `{"error": {...}}` entries,
/// even under HTTP 200. Surface the first one.
fn check_api_error(body: &Value) -> Result<(), AppError> {
    let Some(entries) = body.as_array() else {
        return Ok(());
    };

    for entry in entries {
        if let Some(error) = entry.get("error") {
            let message = error
                .get("description")
                .and_then(|v| v.as_str())
                .unwrap_or("unknown bridge error")
                .to_string();
            let error_type = error.get("type").and_then(|v| v.as_i64()).map(|v| v as i32);
            return Err(AppError::Bridge {
                message,
                error_type,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_bridge() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/config"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Philips hue",
                "apiversion": "1.61.0",
            })))
            .mount(&server)
            .await;
        server
    }

    fn lights_body() -> Value {
        json!({
            "1": {"name": "Kitchen", "state": {"on": true, "bri": 254}},
            "2": {"name": "Hall", "state": {"on": false}},
            "10": {"name": "Loft", "state": {"on": true, "xy": [0.4571, 0.4097]}},
        })
    }

    async fn connected(server: &MockServer) -> HueBridge {
        let mut bridge = HueBridge::connect(&server.address().to_string(), false)
            .await
            .unwrap();
        bridge.authenticate("testtoken").await.unwrap();
        bridge
    }

    #[tokio::test]
    async fn test_connect_fails_without_configured_address() {
        let err = HueBridge::connect("", false).await.unwrap_err();
        assert!(matches!(err, AppError::BridgeConnect(_)));
    }

    #[tokio::test]
    async fn test_connect_reports_unreachable_bridge() {
        // Reserved TEST-NET-1 address, nothing listens there.
        let err = HueBridge::connect("192.0.2.1:9", false).await.unwrap_err();
        assert!(matches!(err, AppError::BridgeConnect(_)));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_bad_token() {
        let server = mock_bridge().await;
        Mock::given(method("GET"))
            .and(path("/api/badtoken/lights"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"error": {"type": 1, "address": "/lights", "description": "unauthorized user"}}
            ])))
            .mount(&server)
            .await;

        let mut bridge = HueBridge::connect(&server.address().to_string(), false)
            .await
            .unwrap();
        let err = bridge.authenticate("badtoken").await.unwrap_err();
        assert!(matches!(err, AppError::BridgeAuth(_)));
    }

    #[tokio::test]
    async fn test_get_all_lights_follows_numeric_id_order() {
        let server = mock_bridge().await;
        Mock::given(method("GET"))
            .and(path("/api/testtoken/lights"))
            .respond_with(ResponseTemplate::new(200).set_body_json(lights_body()))
            .mount(&server)
            .await;

        let bridge = connected(&server).await;
        let lights = bridge.get_all_lights().await.unwrap();

        let names: Vec<&str> = lights.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Kitchen", "Hall", "Loft"]);
        assert!(lights[0].state.on);
        assert!(!lights[1].state.on);
    }

    #[tokio::test]
    async fn test_set_brightness_scales_percent_to_wire_range() {
        let server = mock_bridge().await;
        Mock::given(method("GET"))
            .and(path("/api/testtoken/lights"))
            .respond_with(ResponseTemplate::new(200).set_body_json(lights_body()))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/testtoken/lights/1/state"))
            .and(body_json(json!({"on": true, "bri": 127})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"success": {"/lights/1/state/bri": 127}}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let bridge = connected(&server).await;
        let lights = bridge.get_all_lights().await.unwrap();
        bridge.set_brightness(&lights[0], 50).await.unwrap();
    }

    #[tokio::test]
    async fn test_set_state_surfaces_bridge_error_entries() {
        let server = mock_bridge().await;
        Mock::given(method("GET"))
            .and(path("/api/testtoken/lights"))
            .respond_with(ResponseTemplate::new(200).set_body_json(lights_body()))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/testtoken/lights/2/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"error": {"type": 201, "address": "/lights/2/state/on",
                           "description": "parameter, on, is not modifiable. Device is set to off."}}
            ])))
            .mount(&server)
            .await;

        let bridge = connected(&server).await;
        let lights = bridge.get_all_lights().await.unwrap();
        let err = bridge.power_on(&lights[1]).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Bridge {
                error_type: Some(201),
                ..
            }
        ));
    }
}
