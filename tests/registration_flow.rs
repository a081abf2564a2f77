#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rollcall::config::AppConfig;
use rollcall::features::register::{
    flow,
    wizard::{Step, SubmitApplied, VerifyApplied, Wizard},
};
use rollcall::features::students::enroll::{self, Enrollment, DEFAULT_STUDENT_PASSWORD};
use rollcall::features::students::types::Student;
use rollcall::http::ApiClient;
use rollcall::navigator::StaticNavigator;
use rollcall::session::MemorySessionStore;

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client(server_uri: &str) -> ApiClient {
    ApiClient::new(
        &AppConfig::new(server_uri),
        Arc::new(MemorySessionStore::new()),
        Arc::new(StaticNavigator::new("/student/register")),
    )
    .expect("client should build")
}

fn identity_body(is_registered: bool) -> serde_json::Value {
    json!({
        "isRegistered": is_registered,
        "studentId": 12,
        "name": "Grace Hopper",
        "email": "grace@example.com",
        "rollNumber": "STU0012",
        "course": "Computer Science"
    })
}

fn full_record() -> serde_json::Value {
    json!({
        "id": 12,
        "name": "Grace Hopper",
        "email": "grace@example.com",
        "phone": "5551234567",
        "course": "Computer Science",
        "gender": "Female",
        "dob": "1990-12-09",
        "city": "Arlington",
        "password": null,
        "rollNumber": "STU0012"
    })
}

async fn mount_verify(server: &MockServer, identifier: &str, is_registered: bool) {
    Mock::given(method("GET"))
        .and(path("/student/auth/check-registration"))
        .and(query_param("emailOrRoll", identifier))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": identity_body(is_registered)
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn verify_by_roll_number_advances_with_registration_wording() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let api = client(&server.uri());
    mount_verify(&server, "STU0012", false).await;

    let mut wizard = Wizard::new();
    wizard.set_roll_number("STU0012");

    let applied = flow::verify(&api, &mut wizard).await;
    assert_eq!(applied, VerifyApplied::Advanced);
    assert_eq!(wizard.step(), Step::Password);
    assert!(!wizard.is_reset_mode());
    assert_eq!(wizard.identity().unwrap().student_id, 12);
    Ok(())
}

#[tokio::test]
async fn verify_sends_roll_number_when_both_fields_given() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let api = client(&server.uri());
    // Only the roll-number identifier is mocked; sending the email instead
    // would miss the mock and fail the test.
    mount_verify(&server, "STU0012", true).await;

    let mut wizard = Wizard::new();
    wizard.set_roll_number("STU0012");
    wizard.set_email("grace@example.com");

    assert_eq!(flow::verify(&api, &mut wizard).await, VerifyApplied::Advanced);
    assert!(wizard.is_reset_mode());
    Ok(())
}

#[tokio::test]
async fn unknown_student_keeps_verify_step() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let api = client(&server.uri());

    Mock::given(method("GET"))
        .and(path("/student/auth/check-registration"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Student not found"
        })))
        .mount(&server)
        .await;

    let mut wizard = Wizard::new();
    wizard.set_email("nobody@example.com");

    let applied = flow::verify(&api, &mut wizard).await;
    assert_eq!(applied, VerifyApplied::Rejected);
    assert_eq!(wizard.step(), Step::Verify);
    assert_eq!(
        wizard.error(),
        Some("Student not found. Please contact admin to add you first.")
    );
    Ok(())
}

#[tokio::test]
async fn short_password_fails_locally_without_network() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let api = client(&server.uri());
    mount_verify(&server, "STU0012", false).await;

    // No student read/update mocks are mounted; a network attempt would 404
    // inside the mock server and change the outcome.
    let mut wizard = Wizard::new();
    wizard.set_roll_number("STU0012");
    assert_eq!(flow::verify(&api, &mut wizard).await, VerifyApplied::Advanced);

    wizard.set_password("abc");
    wizard.set_confirm_password("abc");
    let applied = flow::submit(&api, &mut wizard).await;
    assert_eq!(applied, SubmitApplied::Rejected);
    assert_eq!(wizard.step(), Step::Password);
    assert_eq!(
        wizard.error(),
        Some("Password must be at least 6 characters long")
    );
    assert!(wizard.identity().is_some());
    Ok(())
}

#[tokio::test]
async fn mismatched_passwords_fail_locally_without_network() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let api = client(&server.uri());
    mount_verify(&server, "STU0012", false).await;

    let mut wizard = Wizard::new();
    wizard.set_roll_number("STU0012");
    assert_eq!(flow::verify(&api, &mut wizard).await, VerifyApplied::Advanced);

    wizard.set_password("abcdef");
    wizard.set_confirm_password("xyzxyz");
    let applied = flow::submit(&api, &mut wizard).await;
    assert_eq!(applied, SubmitApplied::Rejected);
    assert_eq!(wizard.error(), Some("Passwords do not match"));
    Ok(())
}

#[tokio::test]
async fn submit_reads_record_overlays_password_and_writes_back() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let api = client(&server.uri());
    mount_verify(&server, "STU0012", false).await;

    Mock::given(method("GET"))
        .and(path("/students/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": full_record()
        })))
        .mount(&server)
        .await;

    // The update must carry the whole fetched record with only the password
    // overlaid.
    let mut expected: Student = serde_json::from_value(full_record())?;
    expected.password = Some("secret1".to_string());
    Mock::given(method("PUT"))
        .and(path("/students/12"))
        .and(body_json(serde_json::to_value(&expected)?))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Student updated successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut wizard = Wizard::new();
    wizard.set_roll_number("STU0012");
    assert_eq!(flow::verify(&api, &mut wizard).await, VerifyApplied::Advanced);

    wizard.set_password("secret1");
    wizard.set_confirm_password("secret1");
    let applied = flow::submit(&api, &mut wizard).await;
    let SubmitApplied::Completed { message } = applied else {
        panic!("expected completion, got {applied:?}");
    };
    assert!(message.starts_with("Registration successful!"));
    assert!(message.contains("STU0012"));
    assert_eq!(wizard.step(), Step::Done);
    Ok(())
}

#[tokio::test]
async fn reset_flow_uses_reset_wording() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let api = client(&server.uri());
    mount_verify(&server, "grace@example.com", true).await;

    Mock::given(method("GET"))
        .and(path("/students/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": full_record()
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/students/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true
        })))
        .mount(&server)
        .await;

    let mut wizard = Wizard::new();
    wizard.set_email("grace@example.com");
    assert_eq!(flow::verify(&api, &mut wizard).await, VerifyApplied::Advanced);
    assert!(wizard.is_reset_mode());

    wizard.set_password("secret1");
    wizard.set_confirm_password("secret1");
    let SubmitApplied::Completed { message } = flow::submit(&api, &mut wizard).await else {
        panic!("expected completion");
    };
    assert!(message.starts_with("Password reset successful!"));
    Ok(())
}

#[tokio::test]
async fn failed_update_keeps_password_step() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let api = client(&server.uri());
    mount_verify(&server, "STU0012", false).await;

    Mock::given(method("GET"))
        .and(path("/students/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": full_record()
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/students/12"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut wizard = Wizard::new();
    wizard.set_roll_number("STU0012");
    assert_eq!(flow::verify(&api, &mut wizard).await, VerifyApplied::Advanced);

    wizard.set_password("secret1");
    wizard.set_confirm_password("secret1");
    let applied = flow::submit(&api, &mut wizard).await;
    assert_eq!(applied, SubmitApplied::Rejected);
    assert_eq!(wizard.step(), Step::Password);
    assert_eq!(
        wizard.error(),
        Some("Failed to complete registration. Please try again.")
    );
    Ok(())
}

#[tokio::test]
async fn enrollment_derives_roll_number_and_default_password() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let api = client(&server.uri());

    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [full_record(), full_record()]
        })))
        .mount(&server)
        .await;

    let mut expected_draft: Student = serde_json::from_value(json!({
        "id": 0,
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "5551234567",
        "course": "Mathematics",
        "rollNumber": "STU0003"
    }))?;
    expected_draft.password = Some(DEFAULT_STUDENT_PASSWORD.to_string());
    Mock::given(method("POST"))
        .and(path("/students"))
        .and(body_json(serde_json::to_value(&expected_draft)?))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "data": {
                "id": 3,
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "5551234567",
                "course": "Mathematics",
                "rollNumber": "STU0003"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut values = HashMap::new();
    values.insert("name".to_string(), "Ada Lovelace".to_string());
    values.insert("email".to_string(), "ada@example.com".to_string());
    values.insert("phone".to_string(), "5551234567".to_string());
    values.insert("course".to_string(), "Mathematics".to_string());

    let outcome = enroll::enroll_student(&api, &values).await?;
    let Enrollment::Created {
        student,
        roll_number,
        message,
    } = outcome
    else {
        panic!("expected Created, got {outcome:?}");
    };
    assert_eq!(student.id, 3);
    assert_eq!(roll_number, "STU0003");
    assert!(message.contains("STU0003"));
    assert!(message.contains(DEFAULT_STUDENT_PASSWORD));
    Ok(())
}

#[tokio::test]
async fn invalid_enrollment_never_calls_the_backend() -> anyhow::Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let api = client(&server.uri());

    Mock::given(method("GET"))
        .and(path("/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": []
        })))
        .expect(0)
        .mount(&server)
        .await;

    let mut values = HashMap::new();
    values.insert("email".to_string(), "a@b.com".to_string());
    values.insert("phone".to_string(), "1234567890".to_string());
    values.insert("course".to_string(), "CS".to_string());

    let outcome = enroll::enroll_student(&api, &values).await?;
    let Enrollment::Invalid { errors } = outcome else {
        panic!("expected Invalid, got {outcome:?}");
    };
    assert_eq!(errors.get("name").map(String::as_str), Some("Name is required"));
    assert_eq!(errors.len(), 1);
    Ok(())
}
