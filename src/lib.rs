//! Assignment Workflow - 作业评分流程后端服务
//!
//! 基于 Actix Web 构建的作业生命周期服务：学生起草并提交作业，
//! 教师与校长评分，所有变更在单个事务中完成。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 请求方认证中间件
//! - `models`: 数据模型与作业状态机
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
