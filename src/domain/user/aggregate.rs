//! User Context - Aggregate Root

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{UserError, UserId};

/// 待创建的用户（id 尚未分配）
///
/// 字段允许缺失：存储层会原样保存，完整性在创建之后才校验。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: Option<String>,
    pub age: Option<Number>,
    pub team: Option<String>,
}

/// User 聚合根
///
/// 不变量:
/// - id 由存储分配，创建后不可变
/// - 完整的用户必须同时具有 name、age、team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: Option<String>,
    age: Option<Number>,
    team: Option<String>,
}

impl User {
    /// 缺失（为 null）的必填字段
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if self.team.is_none() {
            missing.push("team");
        }
        missing
    }

    /// 校验记录完整性
    pub fn ensure_complete(&self) -> Result<(), UserError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(UserError::Incomplete {
                id: self.id,
                missing,
            })
        }
    }

    /// 区分大小写的团队匹配
    pub fn belongs_to(&self, team: &str) -> bool {
        self.team.as_deref() == Some(team)
    }

    // Getters
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age(&self) -> Option<&Number> {
        self.age.as_ref()
    }

    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: Option<&str>, age: Option<i64>, team: Option<&str>) -> User {
        User {
            id: UserId::new(id),
            name: name.map(str::to_string),
            age: age.map(Number::from),
            team: team.map(str::to_string),
        }
    }

    #[test]
    fn test_complete_user_passes_check() {
        let user = record(1, Some("Ann"), Some(30), Some("eng"));
        assert!(user.missing_fields().is_empty());
        assert!(user.ensure_complete().is_ok());
    }

    #[test]
    fn test_missing_fields_are_reported_in_order() {
        let user = record(2, None, None, Some("eng"));
        assert_eq!(user.missing_fields(), vec!["name", "age"]);

        match user.ensure_complete() {
            Err(UserError::Incomplete { id, missing }) => {
                assert_eq!(id, UserId::new(2));
                assert_eq!(missing, vec!["name", "age"]);
            }
            other => panic!("expected incomplete error, got {:?}", other),
        }
    }

    #[test]
    fn test_team_match_is_case_sensitive() {
        let user = record(3, Some("Tim"), Some(20), Some("LWB"));
        assert!(user.belongs_to("LWB"));
        assert!(!user.belongs_to("lwb"));

        let teamless = record(4, Some("Tim"), Some(20), None);
        assert!(!teamless.belongs_to("LWB"));
    }

    #[test]
    fn test_deserialize_treats_absent_fields_as_null() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 5,
            "name": "Ann",
            "team": "eng"
        }))
        .unwrap();

        assert_eq!(user.id(), UserId::new(5));
        assert_eq!(user.age(), None);
        assert_eq!(user.missing_fields(), vec!["age"]);
    }

    #[test]
    fn test_age_keeps_integer_representation() {
        let user = record(6, Some("Ann"), Some(30), Some("eng"));
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 6, "name": "Ann", "age": 30, "team": "eng"})
        );
    }
}
