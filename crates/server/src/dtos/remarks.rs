use database::entities::remarks;
use models::Importance;
use serde::Serialize;
use utoipa::ToSchema;

/// Read-only view of a remark
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemarksDtoGet {
    pub id: i64,
    pub agent: String,
    pub content: String,
    #[schema(value_type = String, example = "High")]
    pub importance: Importance,
    pub reservation_id: i64,
}

impl RemarksDtoGet {
    pub fn from_remarks(remarks: &remarks::Model) -> Self {
        Self {
            id: remarks.id,
            agent: remarks.agent.clone(),
            content: remarks.content.clone(),
            importance: remarks.importance,
            reservation_id: remarks.reservation_id,
        }
    }
}

impl From<remarks::Model> for RemarksDtoGet {
    fn from(remarks: remarks::Model) -> Self {
        Self {
            id: remarks.id,
            agent: remarks.agent,
            content: remarks.content,
            importance: remarks.importance,
            reservation_id: remarks.reservation_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_remarks_copies_every_field() {
        for (id, importance) in Importance::all().into_iter().enumerate() {
            let remark = remarks::Model {
                id: id as i64 + 1,
                agent: format!("agent-{id}"),
                content: "needs a visa".to_string(),
                importance,
                reservation_id: 40 + id as i64,
            };

            let dto = RemarksDtoGet::from_remarks(&remark);

            assert_eq!(dto.id, remark.id);
            assert_eq!(dto.agent, remark.agent);
            assert_eq!(dto.content, remark.content);
            assert_eq!(dto.importance, remark.importance);
            assert_eq!(dto.reservation_id, remark.reservation_id);
            assert_eq!(RemarksDtoGet::from(remark), dto);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let dto = RemarksDtoGet::from(remarks::Model {
            id: 1,
            agent: "ops".to_string(),
            content: "".to_string(),
            importance: Importance::Critical,
            reservation_id: 9,
        });

        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            serde_json::json!({
                "id": 1,
                "agent": "ops",
                "content": "",
                "importance": "Critical",
                "reservationId": 9
            })
        );
    }
}
