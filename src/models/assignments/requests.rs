use serde::Deserialize;

/// 创建或编辑草稿请求（没有 id 时创建）
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertAssignmentRequest {
    pub id: Option<i64>,
    pub content: Option<String>,
}

/// 提交作业请求
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAssignmentRequest {
    pub id: i64,
    pub teacher_id: i64,
}

/// 评分请求
///
/// `grade` 以原始字符串接收，由生命周期校验取值，非法取值返回 InvalidState。
#[derive(Debug, Clone, Deserialize)]
pub struct GradeAssignmentRequest {
    pub id: i64,
    pub grade: Option<String>,
}
