use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use models::{
    checksheet::{ChecksheetTemplate, PathwayCourse, SemesterTemplate, TemplateEntry},
    course::{Course, CourseType},
    equivalent::{ApEquivalent, PathwayCategory},
    requisite::parse_requisites,
};
use planner::{
    Advisor,
    memory::{MemoryCatalog, MemoryPlanStore, MemoryReference, MemoryTemplates},
};
use serde_json::{Value, json};
use server::{AppState, app};
use std::sync::Arc;
use tower::ServiceExt;

fn course(
    id: &str,
    credits: u32,
    prerequisites: &str,
    corequisites: &str,
    pathways: &[&str],
) -> Course {
    Course {
        id: id.to_string(),
        name: format!("{id} name"),
        course_type: CourseType::Lecture,
        credits,
        prerequisites: parse_requisites(prerequisites),
        corequisites: parse_requisites(corequisites),
        pathways: pathways.iter().map(|p| p.to_string()).collect(),
        has_lab: false,
        min_grade: None,
    }
}

fn semester(number: u32, courses: &[(&str, u32)]) -> SemesterTemplate {
    SemesterTemplate {
        number,
        total_credits: courses.iter().map(|(_, credits)| credits).sum(),
        courses: courses
            .iter()
            .map(|(id, credits)| TemplateEntry {
                course_id: id.to_string(),
                name: id.to_string(),
                credits: *credits,
                elective: false,
            })
            .collect(),
    }
}

fn test_app() -> Router {
    let catalog = MemoryCatalog::new([
        course("CS-1114", 3, "", "", &[]),
        course("MATH-1225", 4, "", "", &["5f"]),
        course("CS-2114", 3, "CS-1114", "", &[]),
        course("MATH-1226", 4, "MATH-1225", "", &[]),
        course("CS-1944", 1, "", "CS-2114", &[]),
        course("CS-2505", 3, "CS-2114", "", &[]),
        course("MATH-2204", 3, "MATH-1226", "", &[]),
        course("CS-3114", 3, "CS-2505", "", &[]),
        course("PHYS-2305", 4, "", "MATH-1226", &[]),
        course("CS-3214", 3, "CS-2505", "", &[]),
        course("PSYC-1004", 3, "", "", &["3", "7"]),
        course("HIST-1115", 3, "", "", &["2"]),
    ]);

    let template = ChecksheetTemplate {
        major: "CS".to_string(),
        major_name: "Computer Science".to_string(),
        year: 2022,
        school: "College of Engineering".to_string(),
        total_credits: 120,
        semesters: vec![
            semester(1, &[("CS-1114", 3), ("MATH-1225", 4), ("Pathway 0", 3)]),
            semester(2, &[("CS-2114", 3), ("MATH-1226", 4), ("CS-1944", 1)]),
            semester(3, &[("CS-2505", 3), ("MATH-2204", 3), ("Free Elective", 3)]),
            semester(4, &[("CS-3114", 3), ("PHYS-2305", 4)]),
            semester(5, &[("CS-3214", 3)]),
        ],
        pathway_ids: vec!["MATH-1225".to_string()],
        pathways: vec![PathwayCourse {
            course_id: "MATH-1225".to_string(),
            name: "Calculus I".to_string(),
            category: "5f".to_string(),
        }],
    };

    let reference = MemoryReference {
        ap_equivalents: vec![ApEquivalent {
            id: 0,
            abbreviation: "CSA".to_string(),
            name: "Computer Science A".to_string(),
            score: "4".to_string(),
            course_id: "CS-1114".to_string(),
            course_name: "Intro to Software Design".to_string(),
        }],
        pathway_categories: vec![PathwayCategory {
            code: "3".to_string(),
            name: "Reasoning in the Social Sciences".to_string(),
        }],
    };

    let advisor = Advisor::new(
        Arc::new(catalog),
        Arc::new(MemoryTemplates::new([template])),
        Arc::new(MemoryPlanStore::new()),
        Arc::new(reference),
    );

    app(AppState::new(advisor))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();

    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, value)
}

async fn create_user(app: &Router, ap_equivalents: Value, transfer_credits: Value) -> Value {
    let (status, plan) = send(
        app,
        Method::POST,
        "/users",
        Some(json!({
            "userId": "hokie1",
            "major": "CS",
            "gradYear": 2022,
            "apEquivalents": ap_equivalents,
            "transferCredits": transfer_credits,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{plan}");
    plan
}

fn semester_ids(plan: &Value, number: u64) -> Vec<String> {
    plan["semesters"]
        .as_array()
        .unwrap()
        .iter()
        .find(|sem| sem["number"] == number)
        .unwrap()["courses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["courseId"].as_str().unwrap().to_string())
        .collect()
}

fn move_body(course_id: &str, from_sem: u32, to_sem: u32) -> Value {
    json!({
        "userId": "hokie1",
        "courseId": course_id,
        "fromSem": from_sem,
        "toSem": to_sem,
    })
}

#[tokio::test]
async fn test_health() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[tokio::test]
async fn test_create_user_applies_ap_credit() {
    let app = test_app();

    let plan = create_user(&app, json!([0]), json!([])).await;

    assert_eq!(plan["checksheetId"], "CS-2022");
    assert_eq!(semester_ids(&plan, 1), ["MATH-1225", "Pathway 0"]);
    assert_eq!(plan["semesters"][0]["totalCredits"], 7);
    assert_eq!(plan["apEquivalents"][0]["used"], true);
    assert!(plan["semesters"][0].get("courseReferences").is_none());

    let (status, fetched) = send(&app, Method::GET, "/users/hokie1/checksheet", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, plan);
}

#[tokio::test]
async fn test_create_user_twice_is_rejected() {
    let app = test_app();
    create_user(&app, json!([]), json!([])).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"userId": "hokie1", "major": "CS", "gradYear": 2022})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("hokie1"));
}

#[tokio::test]
async fn test_malformed_body_is_a_validation_error() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"userId": "hokie1", "gradYear": 2022})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_user_and_checksheet() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/users/ghost/checksheet", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "User (ghost) doesn't exist");

    let (status, _) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({"userId": "hokie1", "major": "CMDA", "gradYear": 2022})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_permitted_move_is_applied() {
    let app = test_app();
    create_user(&app, json!([]), json!([])).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/checksheets/move",
        Some(move_body("CS-2505", 3, 4)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["moved"], true);
    assert_eq!(body["prerequisitesMet"], true);

    let (_, plan) = send(&app, Method::GET, "/users/hokie1/checksheet", None).await;
    assert_eq!(semester_ids(&plan, 4), ["CS-3114", "PHYS-2305", "CS-2505"]);
    assert_eq!(plan["revision"], 1);
}

#[tokio::test]
async fn test_rejected_move_reports_unmet_prerequisites() {
    let app = test_app();
    create_user(&app, json!([]), json!([])).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/checksheets/move",
        Some(move_body("CS-2114", 2, 1)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["moved"], false);
    assert_eq!(body["prerequisitesMet"], false);
    assert_eq!(body["unmetPrereqs"], json!([["CS-1114"]]));

    let (_, plan) = send(&app, Method::GET, "/users/hokie1/checksheet", None).await;
    assert_eq!(semester_ids(&plan, 2), ["CS-2114", "MATH-1226", "CS-1944"]);
    assert_eq!(plan["revision"], 0);
}

#[tokio::test]
async fn test_move_with_dependents_is_rejected() {
    let app = test_app();
    create_user(&app, json!([]), json!([])).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/checksheets/move",
        Some(move_body("CS-2114", 2, 4)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["moved"], false);
    assert_eq!(body["hasDependents"], true);
    assert_eq!(body["dependentCourseIds"], json!(["CS-2505"]));
}

#[tokio::test]
async fn test_check_move_does_not_mutate() {
    let app = test_app();
    create_user(&app, json!([]), json!([])).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/checksheets/move/check",
        Some(move_body("CS-2505", 3, 4)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["moved"], false);
    assert_eq!(body["prerequisitesMet"], true);

    let (_, plan) = send(&app, Method::GET, "/users/hokie1/checksheet", None).await;
    assert_eq!(semester_ids(&plan, 3), ["CS-2505", "MATH-2204", "Free Elective"]);
}

#[tokio::test]
async fn test_move_to_missing_semester() {
    let app = test_app();
    create_user(&app, json!([]), json!([])).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/checksheets/move",
        Some(move_body("CS-2505", 3, 9)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Semester 9 doesn't exist in the checksheet");
}

#[tokio::test]
async fn test_pathway_assignment_round_trip() {
    let app = test_app();
    create_user(&app, json!([]), json!([])).await;

    let (status, plan) = send(
        &app,
        Method::POST,
        "/checksheets/pathway",
        Some(json!({
            "userId": "hokie1",
            "semester": 1,
            "slotId": "Pathway 0",
            "courseId": "PSYC-1004",
            "source": "Catalog",
            "category": "3",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{plan}");
    assert_eq!(semester_ids(&plan, 1), ["CS-1114", "MATH-1225", "PSYC-1004"]);
    let assigned = plan["pathways"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["courseId"] == "PSYC-1004")
        .unwrap();
    assert_eq!(assigned["source"], "Catalog");
    assert_eq!(assigned["slot"]["slotId"], "Pathway 0");

    let (status, plan) = send(
        &app,
        Method::POST,
        "/checksheets/unassign",
        Some(json!({"userId": "hokie1", "courseId": "PSYC-1004"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{plan}");
    assert_eq!(semester_ids(&plan, 1), ["CS-1114", "MATH-1225", "Pathway 0"]);
    assert_eq!(plan["semesters"][0]["totalCredits"], 10);
}

#[tokio::test]
async fn test_pathway_category_mismatch() {
    let app = test_app();
    create_user(&app, json!([]), json!([])).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/checksheets/pathway",
        Some(json!({
            "userId": "hokie1",
            "semester": 1,
            "slotId": "Pathway 0",
            "courseId": "HIST-1115",
            "source": "Catalog",
            "category": "3",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Course HIST-1115 doesn't satisfy pathway 3");
}

#[tokio::test]
async fn test_elective_from_transfer_credit() {
    let app = test_app();
    let plan = create_user(&app, json!([]), json!(["HIST-1115"])).await;
    assert_eq!(plan["transferCourses"][0]["used"], false);

    let (status, plan) = send(
        &app,
        Method::POST,
        "/checksheets/elective",
        Some(json!({
            "userId": "hokie1",
            "semester": 3,
            "slotId": "Free Elective",
            "courseId": "HIST-1115",
            "source": "Transfer",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{plan}");
    assert_eq!(semester_ids(&plan, 3), ["CS-2505", "MATH-2204"]);
    assert_eq!(plan["transferCourses"][0]["used"], true);
    assert_eq!(plan["electives"][0]["source"], "Transfer");
}

#[tokio::test]
async fn test_unknown_credit_source() {
    let app = test_app();
    create_user(&app, json!([]), json!([])).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/checksheets/elective",
        Some(json!({
            "userId": "hokie1",
            "semester": 3,
            "slotId": "Free Elective",
            "courseId": "HIST-1115",
            "source": "IB",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Unknown credit source"));
}

#[tokio::test]
async fn test_default_checksheet() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/checksheets/default?major=CS&gradYear=2022",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "CS-2022");
    assert_eq!(body["semesters"].as_array().unwrap().len(), 5);

    let (status, _) = send(
        &app,
        Method::GET,
        "/checksheets/default?major=CS&gradYear=2030",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, "/checksheets/default?major=CS", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_course_lookup() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/courses/CS-2114", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "CS");
    assert_eq!(body["number"], "2114");
    assert_eq!(body["courseType"], "Lecture");
    assert_eq!(body["prerequisites"], json!([["CS-1114"]]));

    let (status, body) = send(&app, Method::GET, "/courses/CS-9999", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Course CS-9999 doesn't exist");
}

#[tokio::test]
async fn test_reference_lists() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/resources/ap-equivalents", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["courseId"], "CS-1114");

    let (status, body) = send(&app, Method::GET, "/resources/pathways", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"code": "3", "name": "Reasoning in the Social Sciences"}]));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/checksheets/move"].is_object());
}

#[tokio::test]
async fn test_course_autocomplete() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/courses/search?category=ma", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["MATH-1225", "MATH-1226", "MATH-2204"]);

    let uri = "/courses/search?category=CS&number=22";
    let (status, body) = send(&app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    let (status, body) = send(&app, Method::GET, "/courses/search?category=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, Method::GET, "/courses/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, Method::GET, "/courses/autocomplete?name=PSYC", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], "PSYC-1004");
}

#[tokio::test]
async fn test_course_by_name() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/courses/by-name/CS-2114%20name", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "CS-2114");

    let (status, _) = send(&app, Method::GET, "/courses/by-name/Astrology", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_majors_and_schools() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/resources/majors", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"code": "CS", "name": "Computer Science", "school": "College of Engineering"}])
    );

    let (status, body) = send(&app, Method::GET, "/resources/schools", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["College of Engineering"]));
}
