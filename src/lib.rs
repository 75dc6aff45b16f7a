//! ClassHub - 学校教务管理平台后端服务
//!
//! 基于 Actix Web 构建的学校教务管理系统后端，覆盖用户、班级、
//! 选课、作业、提交与公告的完整 CRUD 及约束模型。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层（含 /docs 交互式文档）
//! - `runtime`: 运行时生命周期管理与数据填充
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM，含约束校验函数）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
