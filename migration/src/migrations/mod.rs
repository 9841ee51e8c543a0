pub mod m202507140001_create_users;
pub mod m202507140002_create_courses;
pub mod m202507140003_create_students;
pub mod m202507140004_create_faculty;
pub mod m202507140005_create_student_courses;
pub mod m202507140006_create_faculty_courses;
