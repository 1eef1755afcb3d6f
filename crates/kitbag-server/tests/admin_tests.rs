// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Back-office routes: login, dashboard, shirt and image management.

mod common;

use axum::{
	body::Body,
	http::{header, Request, StatusCode},
};

use common::{draft, json, multipart, multipart_request, TestApp};

const SHIRT_FIELDS: &[(&str, &str)] = &[
	("brand", "Umbro"),
	("team", "Manchester United"),
	("league", "Premier League"),
	("size", "XL"),
	("color", "Red"),
	("season", "1994/95"),
	("variant", "Home"),
	("description", "Worn-look home shirt"),
];

fn post(uri: &str, cookie: &str) -> Request<Body> {
	Request::post(uri)
		.header(header::COOKIE, cookie)
		.body(Body::empty())
		.unwrap()
}

fn get(uri: &str, cookie: &str) -> Request<Body> {
	Request::get(uri)
		.header(header::COOKIE, cookie)
		.body(Body::empty())
		.unwrap()
}

#[tokio::test]
async fn wrong_password_is_rejected() {
	let app = TestApp::new().await;
	let response = app
		.send(
			Request::post("/admin/login")
				.header(header::CONTENT_TYPE, "application/json")
				.body(Body::from(r#"{"password":"nope"}"#))
				.unwrap(),
		)
		.await;
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	assert!(response.headers().get(header::SET_COOKIE).is_none());
	assert_eq!(json(response).await["message"], "Invalid password");
}

#[tokio::test]
async fn admin_routes_require_session() {
	let app = TestApp::new().await;
	for uri in ["/admin", "/admin/dashboard", "/admin/form-options", "/admin/edit/1"] {
		let response = app.get(uri).await;
		assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
	}

	let response = app.send(get("/admin/dashboard", "kitbag_session=forged")).await;
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_ends_session() {
	let app = TestApp::new().await;
	let cookie = app.login().await;
	assert_eq!(app.send(get("/admin/dashboard", &cookie)).await.status(), StatusCode::OK);

	let response = app.send(post("/admin/logout", &cookie)).await;
	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(response.headers()[header::LOCATION], "/catalog");
	let cleared = response.headers()[header::SET_COOKIE].to_str().unwrap();
	assert!(cleared.contains("Max-Age=0"));

	assert_eq!(
		app.send(get("/admin/dashboard", &cookie)).await.status(),
		StatusCode::UNAUTHORIZED
	);
}

#[tokio::test]
async fn create_shirt_with_images_and_translation() {
	let app = TestApp::new().await;
	let cookie = app.login().await;

	let mut fields = SHIRT_FIELDS.to_vec();
	fields.push(("cover_index", "1"));
	let body = multipart(&fields, &[("front.JPG", b"front"), ("back.png", b"back")]);
	let response = app.send(multipart_request("/admin/new", &cookie, body)).await;
	assert_eq!(response.status(), StatusCode::CREATED);

	let body = json(response).await;
	let shirt = &body["shirt"];
	assert_eq!(shirt["product_code"], 1);
	assert_eq!(shirt["description_it"], "IT: Worn-look home shirt");
	assert!(body.get("translation_warning").is_none());

	let images = shirt["images"].as_array().unwrap();
	assert_eq!(images.len(), 2);
	assert_eq!(images[0]["is_cover"], false);
	assert_eq!(images[1]["is_cover"], true);

	let id = shirt["id"].as_i64().unwrap();
	let dir = format!("Premier_League/Umbro/Manchester_United/{id}_XL");
	assert!(app.uploads.path().join(&dir).join("1.jpg").is_file());
	assert!(app.uploads.path().join(&dir).join("2.png").is_file());
	assert_eq!(shirt["cover_image_url"], format!("/uploads/{dir}/2.png"));

	// Served back through /uploads.
	let response = app.get(&format!("/uploads/{dir}/1.jpg")).await;
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_image_part_keeps_its_position() {
	let app = TestApp::new().await;
	let cookie = app.login().await;

	let mut fields = SHIRT_FIELDS.to_vec();
	fields.push(("cover_index", "1"));
	let body = multipart(&fields, &[("", b""), ("front.jpg", b"front"), ("back.jpg", b"back")]);
	let response = app.send(multipart_request("/admin/new", &cookie, body)).await;
	assert_eq!(response.status(), StatusCode::CREATED);

	let shirt = &json(response).await["shirt"];
	let id = shirt["id"].as_i64().unwrap();
	let dir = format!("Premier_League/Umbro/Manchester_United/{id}_XL");
	let images = shirt["images"].as_array().unwrap();
	assert_eq!(images.len(), 2);
	assert_eq!(images[0]["url"], format!("/uploads/{dir}/2.jpg"));
	assert_eq!(images[0]["is_cover"], true);
	assert_eq!(images[1]["url"], format!("/uploads/{dir}/3.jpg"));
	assert_eq!(images[1]["is_cover"], false);
	assert!(!app.uploads.path().join(&dir).join("1.jpg").exists());
}

#[tokio::test]
async fn create_rejects_incomplete_form() {
	let app = TestApp::new().await;
	let cookie = app.login().await;
	let body = multipart(&[("brand", "Umbro")], &[]);
	let response = app.send(multipart_request("/admin/new", &cookie, body)).await;
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn edit_moves_folder_and_numbers_new_images() {
	let app = TestApp::new().await;
	let cookie = app.login().await;

	let body = multipart(SHIRT_FIELDS, &[("a.jpg", b"a")]);
	let created = json(app.send(multipart_request("/admin/new", &cookie, body)).await).await;
	let id = created["shirt"]["id"].as_i64().unwrap();

	let mut fields: Vec<(&str, &str)> = SHIRT_FIELDS
		.iter()
		.copied()
		.filter(|(k, _)| *k != "size")
		.collect();
	fields.push(("size", "M"));
	fields.push(("description_it", "Maglia fatta a mano"));
	let body = multipart(&fields, &[("extra.jpeg", b"b")]);
	let response = app
		.send(multipart_request(&format!("/admin/edit/{id}"), &cookie, body))
		.await;
	assert_eq!(response.status(), StatusCode::OK);

	let shirt = &json(response).await["shirt"];
	assert_eq!(shirt["size"], "M");
	assert_eq!(shirt["description_it"], "Maglia fatta a mano");

	let new_dir = format!("Premier_League/Umbro/Manchester_United/{id}_M");
	let paths: Vec<_> = shirt["images"]
		.as_array()
		.unwrap()
		.iter()
		.map(|i| i["url"].as_str().unwrap().to_string())
		.collect();
	assert_eq!(
		paths,
		vec![
			format!("/uploads/{new_dir}/1.jpg"),
			format!("/uploads/{new_dir}/2.jpeg")
		]
	);
	assert!(!app
		.uploads
		.path()
		.join(format!("Premier_League/Umbro/Manchester_United/{id}_XL"))
		.exists());
}

#[tokio::test]
async fn changed_description_is_retranslated() {
	let app = TestApp::new().await;
	let cookie = app.login().await;
	let body = multipart(SHIRT_FIELDS, &[]);
	let created = json(app.send(multipart_request("/admin/new", &cookie, body)).await).await;
	let id = created["shirt"]["id"].as_i64().unwrap();

	let mut fields: Vec<(&str, &str)> = SHIRT_FIELDS
		.iter()
		.copied()
		.filter(|(k, _)| *k != "description")
		.collect();
	fields.push(("description", "Match worn, signed"));
	fields.push(("description_it", "none"));
	let body = multipart(&fields, &[]);
	let response = app
		.send(multipart_request(&format!("/admin/edit/{id}"), &cookie, body))
		.await;
	let shirt = &json(response).await["shirt"];
	assert_eq!(shirt["description_it"], "IT: Match worn, signed");
}

#[tokio::test]
async fn dashboard_lists_counts_and_sorts() {
	let app = TestApp::new().await;
	let cookie = app.login().await;
	app.insert_shirt(draft("Liverpool", "1995/96")).await;
	app.insert_shirt(draft("Liverpool", "1984/85")).await;
	let mut hoodie = draft("Arsenal", "1990/91");
	hoodie.garment_type = Some("Hoodie".to_string());
	let arsenal = app.insert_shirt(hoodie).await;
	app.state.images.add_image(arsenal.id, "a/1.jpg", true).await.unwrap();

	let body = json(app.send(get("/admin/dashboard", &cookie)).await).await;
	assert_eq!(body["sort"], "chronological");
	let seasons: Vec<_> = body["shirts"]
		.as_array()
		.unwrap()
		.iter()
		.map(|s| s["season"].as_str().unwrap().to_string())
		.collect();
	assert_eq!(seasons, vec!["1984/85", "1990/91", "1995/96"]);
	assert_eq!(body["shirts"][0]["images"], serde_json::json!([]));
	assert_eq!(body["shirts"][1]["cover_image_url"], "/uploads/a/1.jpg");
	assert_eq!(body["counts"]["teams"]["Liverpool"], 2);
	assert_eq!(body["totals"]["teams"][0]["value"], "Liverpool");
	assert_eq!(body["options"]["types"], serde_json::json!(["Hoodie"]));
	assert_eq!(body["options"]["seasons"][0], "1984/85");

	let body = json(app.send(get("/admin/dashboard?type=Hoodie", &cookie)).await).await;
	assert_eq!(body["shirts"].as_array().unwrap().len(), 1);

	let body = json(
		app.send(get("/admin/dashboard?sort=reverse_chronological", &cookie))
			.await,
	)
	.await;
	assert_eq!(body["shirts"][0]["season"], "1995/96");
}

#[tokio::test]
async fn form_options_merge_defaults() {
	let app = TestApp::new().await;
	let cookie = app.login().await;
	let mut custom = draft("Liverpool", "1995/96");
	custom.brand = "Zzz Custom".to_string();
	app.insert_shirt(custom).await;

	let body = json(app.send(get("/admin/form-options", &cookie)).await).await;
	let brands = body["brands"].as_array().unwrap();
	assert_eq!(brands.last().unwrap(), "Zzz Custom");
	assert!(body["national_teams"].as_array().unwrap().len() > 10);
	assert_eq!(body["statuses"][0], "active");
}

#[tokio::test]
async fn image_cover_and_delete() {
	let app = TestApp::new().await;
	let cookie = app.login().await;
	let body = multipart(SHIRT_FIELDS, &[("1.jpg", b"a"), ("2.jpg", b"b")]);
	let created = json(app.send(multipart_request("/admin/new", &cookie, body)).await).await;
	let shirt_id = created["shirt"]["id"].as_i64().unwrap();
	let images = created["shirt"]["images"].as_array().unwrap().clone();
	let second = images[1]["id"].as_i64().unwrap();
	let first = images[0]["id"].as_i64().unwrap();

	let response = app
		.send(post(&format!("/admin/images/{second}/cover"), &cookie))
		.await;
	assert_eq!(response.status(), StatusCode::OK);
	let edit = json(app.send(get(&format!("/admin/edit/{shirt_id}"), &cookie)).await).await;
	assert_eq!(edit["images"][0]["is_cover"], false);
	assert_eq!(edit["images"][1]["is_cover"], true);

	let response = app
		.send(post(&format!("/admin/delete_image/{first}"), &cookie))
		.await;
	assert_eq!(json(response).await, serde_json::json!({"ok": true}));
	let edit = json(app.send(get(&format!("/admin/edit/{shirt_id}"), &cookie)).await).await;
	assert_eq!(edit["images"].as_array().unwrap().len(), 1);

	let response = app
		.send(post(&format!("/admin/delete_image/{first}"), &cookie))
		.await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	assert_eq!(json(response).await["ok"], false);

	let response = app.send(post("/admin/images/999/cover", &cookie)).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_shirt_removes_folder() {
	let app = TestApp::new().await;
	let cookie = app.login().await;
	let body = multipart(SHIRT_FIELDS, &[("1.jpg", b"a")]);
	let created = json(app.send(multipart_request("/admin/new", &cookie, body)).await).await;
	let id = created["shirt"]["id"].as_i64().unwrap();

	let response = app.send(post(&format!("/admin/delete/{id}"), &cookie)).await;
	assert_eq!(response.status(), StatusCode::OK);
	assert!(!app.uploads.path().join("Premier_League").exists());
	assert_eq!(app.get(&format!("/shirt/{id}")).await.status(), StatusCode::NOT_FOUND);

	let response = app.send(post(&format!("/admin/delete/{id}"), &cookie)).await;
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
