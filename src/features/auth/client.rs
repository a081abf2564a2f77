//! Client helpers for the two sign-in flows and the registration status
//! lookup. The admin check is local: the backend does not expose an admin
//! login endpoint, so the console validates against configured credentials
//! and stores a placeholder token the backend never inspects.

use tracing::debug;
use url::form_urlencoded;

use super::types::{
    AdminLogin, AdminUser, RegistrationStatus, StudentLogin, StudentLoginRequest, StudentSession,
};
use crate::{
    config::AdminCredentials,
    errors::Error,
    features::students::types::Student,
    http::ApiClient,
    session::keys,
};

/// Bearer value stored for admin sessions. The backend does not validate
/// admin tokens; presence alone gates the console views.
const ADMIN_TOKEN: &str = "dummy-token";

/// Checks the submitted pair against the configured admin credentials and,
/// on a match, persists the admin session.
///
/// # Errors
/// Returns `Error::Serialization` when the profile cannot be encoded.
pub fn admin_login(
    api: &ApiClient,
    admin: &AdminCredentials,
    username: &str,
    password: &str,
) -> Result<AdminLogin, Error> {
    if !admin.matches(username, password) {
        return Ok(AdminLogin::InvalidCredentials);
    }

    let user = AdminUser {
        username: username.to_string(),
        role: "admin".to_string(),
    };
    let payload = serde_json::to_string(&user)
        .map_err(|err| Error::Serialization(format!("Failed to encode session data: {err}")))?;

    api.session().set(keys::AUTH_TOKEN, ADMIN_TOKEN);
    api.session().set(keys::USER_DATA, &payload);
    debug!("admin session established");

    Ok(AdminLogin::Authenticated(user))
}

/// Drops the admin session keys. Student session keys are left intact.
pub fn admin_logout(api: &ApiClient) {
    api.session().remove(keys::AUTH_TOKEN);
    api.session().remove(keys::USER_DATA);
}

/// The signed-in admin, if a complete admin session is stored.
#[must_use]
pub fn current_admin(api: &ApiClient) -> Option<AdminUser> {
    let session = api.session();
    session.get(keys::AUTH_TOKEN)?;
    let raw = session.get(keys::USER_DATA)?;
    serde_json::from_str(&raw).ok()
}

/// Looks up whether an identifier (roll number or email) belongs to a known
/// student and whether that student has already set a password.
///
/// # Errors
/// `Error::Config` for an empty identifier; `Error::Http` with status 404
/// when no student matches.
pub async fn check_registration(
    api: &ApiClient,
    identifier: &str,
) -> Result<RegistrationStatus, Error> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Err(Error::Config("Email or Roll number is required".to_string()));
    }

    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("emailOrRoll", trimmed)
        .finish();

    api.get_json(&format!("/student/auth/check-registration?{query}"))
        .await
}

/// Signs a student in with a roll number or email. On success the token and
/// the returned record are persisted under the student session keys.
///
/// # Errors
/// Bad credentials come back as [`StudentLogin::Rejected`] (the shared 401
/// handling will have cleared the session first); transport and decoding
/// failures propagate.
pub async fn student_login(
    api: &ApiClient,
    email_or_roll: &str,
    password: &str,
) -> Result<StudentLogin, Error> {
    let identifier = email_or_roll.trim();
    if identifier.is_empty() || password.trim().is_empty() {
        return Ok(StudentLogin::Rejected {
            message: "Email/Roll number and password are required".to_string(),
        });
    }

    let request = StudentLoginRequest {
        email_or_roll: identifier.to_string(),
        password: password.to_string(),
    };

    match api
        .post_json::<_, StudentSession>("/student/auth/login", &request)
        .await
    {
        Ok(session) => {
            store_student_session(api, &session)?;
            Ok(StudentLogin::Authenticated(session))
        }
        Err(Error::Unauthorized) => Ok(StudentLogin::Rejected {
            message: "Invalid credentials".to_string(),
        }),
        Err(Error::Http {
            status: 400 | 404,
            message,
        }) => Ok(StudentLogin::Rejected { message }),
        Err(err) => Err(err),
    }
}

/// Creates a student account directly through the auth endpoint. The roll
/// number is generated backend-side when absent. The returned session is
/// handed back without being persisted; callers decide whether to keep it.
///
/// # Errors
/// `Error::Config` when a required field is missing; backend rejections
/// surface as `Error::Http`.
pub async fn student_register(api: &ApiClient, student: &Student) -> Result<StudentSession, Error> {
    let password = student.password.as_deref().unwrap_or_default();
    if student.name.trim().is_empty()
        || student.email.trim().is_empty()
        || student.course.trim().is_empty()
        || password.trim().is_empty()
    {
        return Err(Error::Config(
            "Name, email, password, and course are required".to_string(),
        ));
    }

    api.post_json("/student/auth/register", student).await
}

/// Drops the student session keys. Admin session keys are left intact.
pub fn student_logout(api: &ApiClient) {
    api.session().remove(keys::STUDENT_DATA);
    api.session().remove(keys::STUDENT_TOKEN);
}

/// The signed-in student, if one is stored. The student views gate on the
/// stored record alone, not the token.
#[must_use]
pub fn current_student(api: &ApiClient) -> Option<Student> {
    let raw = api.session().get(keys::STUDENT_DATA)?;
    serde_json::from_str(&raw).ok()
}

fn store_student_session(api: &ApiClient, session: &StudentSession) -> Result<(), Error> {
    let payload = serde_json::to_string(&session.student)
        .map_err(|err| Error::Serialization(format!("Failed to encode session data: {err}")))?;
    api.session().set(keys::STUDENT_TOKEN, &session.token);
    api.session().set(keys::STUDENT_DATA, &payload);
    Ok(())
}
