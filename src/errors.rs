//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classhub_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassHubError {
            $($variant(String),)*
        }

        impl ClassHubError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassHubError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassHubError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassHubError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassHubError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassHubError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classhub_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    ConstraintViolation("E004", "Constraint Violation"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
    FileOperation("E009", "File Operation Error"),
}

impl ClassHubError {
    /// 是否为关系约束校验失败（角色/选课/作者约束）
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, ClassHubError::ConstraintViolation(_))
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassHubError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassHubError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClassHubError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ClassHubError {
    fn from(err: std::io::Error) -> Self {
        ClassHubError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassHubError {
    fn from(err: serde_json::Error) -> Self {
        ClassHubError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClassHubError {
    fn from(err: chrono::ParseError) -> Self {
        ClassHubError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassHubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassHubError::database_config("test").code(), "E001");
        assert_eq!(ClassHubError::constraint_violation("test").code(), "E004");
        assert_eq!(ClassHubError::validation("test").code(), "E005");
        assert_eq!(ClassHubError::not_found("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassHubError::constraint_violation("test").error_type(),
            "Constraint Violation"
        );
        assert_eq!(
            ClassHubError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_is_constraint_violation() {
        assert!(ClassHubError::constraint_violation("x").is_constraint_violation());
        assert!(!ClassHubError::database_operation("x").is_constraint_violation());
    }

    #[test]
    fn test_format_simple() {
        let err = ClassHubError::validation("Invalid email");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid email"));
    }

    #[test]
    fn test_from_db_err() {
        let err: ClassHubError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E003");
    }
}
