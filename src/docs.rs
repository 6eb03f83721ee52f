use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::health::HealthResponse;
use wgedu_auth::Role;
use wgedu_models::{
    AssignSubjectDto, CreateStudentDto, Grade, LoginRequest, LoginResponse, MessageResponse,
    ProtectedResponse, Student, Subject, Teacher, UpdateStudentDto, User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::protected,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::get_subjects_grouped,
        crate::modules::subjects::controller::get_subjects_by_grade,
        crate::modules::subjects::controller::get_subject,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::teachers::controller::assign_subject,
        crate::modules::teachers::controller::unassign_subject,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            HealthResponse,
            Role,
            User,
            LoginRequest,
            LoginResponse,
            ProtectedResponse,
            MessageResponse,
            ErrorResponse,
            Grade,
            Subject,
            Teacher,
            AssignSubjectDto,
            Student,
            CreateStudentDto,
            UpdateStudentDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Authentication", description = "Login and token introspection"),
        (name = "Subjects", description = "Subject catalog"),
        (name = "Teachers", description = "Teachers and subject assignment"),
        (name = "Students", description = "Student management (admin only)")
    ),
    info(
        title = "WG Edu API",
        version = "1.0.0",
        description = "School administration API: authentication, subject catalog, teacher assignment and student records.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
