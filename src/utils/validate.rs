use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static CLASS_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid class code regex"));

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_class_code(code: &str) -> Result<(), &'static str> {
    // 班级代码长度校验：2 <= x <= 16
    if code.len() < 2 || code.len() > 16 {
        return Err("Class code length must be between 2 and 16 characters");
    }
    // 班级代码格式校验：只能包含字母、数字、下划线或连字符
    if !CLASS_CODE_RE.is_match(code) {
        return Err("Class code must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_full_name(full_name: &str) -> Result<(), &'static str> {
    // 姓名不能为空或超长
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return Err("Full name must not be empty");
    }
    if trimmed.len() > 200 {
        return Err("Full name must not exceed 200 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("bob.teacher+cs@school.edu").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_valid_class_code() {
        assert!(validate_class_code("CS101").is_ok());
        assert!(validate_class_code("MATH201").is_ok());
        assert!(validate_class_code("lab-2").is_ok());
    }

    #[test]
    fn test_invalid_class_code() {
        assert!(validate_class_code("A").is_err());
        assert!(validate_class_code("CS 101").is_err());
        assert!(validate_class_code("a".repeat(17).as_str()).is_err());
    }

    #[test]
    fn test_full_name() {
        assert!(validate_full_name("Alice Teacher").is_ok());
        assert!(validate_full_name("   ").is_err());
        assert!(validate_full_name(&"x".repeat(201)).is_err());
    }
}
