//! 作业实体

use sea_orm::entity::prelude::*;

use crate::errors::WorkflowError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub teacher_id: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub grade: Option<String>,
    pub state: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    /// 状态与成绩以字符串存储，读回未知取值视为数据损坏
    pub fn into_assignment(
        self,
    ) -> crate::errors::Result<crate::models::assignments::entities::Assignment> {
        use crate::models::assignments::entities::{Assignment, AssignmentState, Grade};
        use chrono::{DateTime, Utc};

        let state = self.state.parse::<AssignmentState>().map_err(|e| {
            WorkflowError::serialization(format!("assignment {}: {e}", self.id))
        })?;
        let grade = self
            .grade
            .as_deref()
            .map(|g| g.parse::<Grade>())
            .transpose()
            .map_err(|e| WorkflowError::serialization(format!("assignment {}: {e}", self.id)))?;

        Ok(Assignment {
            id: self.id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            content: self.content,
            grade,
            state,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        })
    }
}
