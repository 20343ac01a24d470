use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::domain::{AppError, NewTemplate, RenderOutcome, TemplateId, TemplateRecord, UsageInfo};
use crate::ports::TemplateGateway;

/// In-memory template service that records the calls it receives.
#[derive(Clone, Default)]
pub struct FakeTemplateGateway {
    pub records: Arc<Mutex<BTreeMap<TemplateId, TemplateRecord>>>,
    pub updates: Arc<Mutex<Vec<TemplateRecord>>>,
    pub renders: Arc<Mutex<Vec<(TemplateId, Value)>>>,
    pub get_calls: Arc<Mutex<usize>>,
    /// Answer updates with an empty success body.
    pub empty_update_response: bool,
    /// Timestamp the fake service stamps onto updated records.
    pub server_updated_at: String,
    /// Fail every update with this error status.
    pub update_failure: Option<u16>,
    pub usage: Option<UsageInfo>,
}

impl FakeTemplateGateway {
    pub fn new() -> Self {
        Self { server_updated_at: "2026-06-01T12:00:00Z".to_string(), ..Default::default() }
    }

    pub fn with_record(self, record: TemplateRecord) -> Self {
        self.records.lock().unwrap().insert(record.id.clone(), record);
        self
    }

    pub fn stored(&self, id: &str) -> Option<TemplateRecord> {
        self.records.lock().unwrap().get(&TemplateId::new(id).unwrap()).cloned()
    }

    pub fn recorded_updates(&self) -> Vec<TemplateRecord> {
        self.updates.lock().unwrap().clone()
    }

    pub fn recorded_renders(&self) -> Vec<(TemplateId, Value)> {
        self.renders.lock().unwrap().clone()
    }

    pub fn remove(&self, id: &str) {
        self.records.lock().unwrap().remove(&TemplateId::new(id).unwrap());
    }
}

impl TemplateGateway for FakeTemplateGateway {
    fn list(&self) -> Result<Vec<TemplateRecord>, AppError> {
        // list summaries omit sample data and schema
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .map(|r| TemplateRecord { sample_data: None, schema: None, ..r.clone() })
            .collect())
    }

    fn get(&self, id: &TemplateId) -> Result<TemplateRecord, AppError> {
        *self.get_calls.lock().unwrap() += 1;
        self.records.lock().unwrap().get(id).cloned().ok_or_else(|| AppError::not_found(id))
    }

    fn create(&self, template: &NewTemplate) -> Result<TemplateRecord, AppError> {
        let mut records = self.records.lock().unwrap();
        let id = TemplateId::new(&format!("created-{}", records.len() + 1))?;
        let record = TemplateRecord {
            category: template.category.clone(),
            description: template.description.clone(),
            sample_data: template.sample_data.clone(),
            is_active: template.is_active,
            created_at: Some(self.server_updated_at.clone()),
            updated_at: Some(self.server_updated_at.clone()),
            ..TemplateRecord::new(id.clone(), template.name.clone(), template.content.clone())
        };
        records.insert(id, record.clone());
        Ok(record)
    }

    fn update(
        &self,
        id: &TemplateId,
        record: &TemplateRecord,
    ) -> Result<Option<TemplateRecord>, AppError> {
        self.updates.lock().unwrap().push(record.clone());
        if let Some(status) = self.update_failure {
            return Err(AppError::Remote { status, body: "update rejected".to_string() });
        }
        let mut records = self.records.lock().unwrap();
        if !records.contains_key(id) {
            return Err(AppError::not_found(id));
        }
        let stored =
            TemplateRecord { updated_at: Some(self.server_updated_at.clone()), ..record.clone() };
        records.insert(id.clone(), stored.clone());
        Ok(if self.empty_update_response { None } else { Some(stored) })
    }

    fn delete(&self, id: &TemplateId) -> Result<(), AppError> {
        self.records.lock().unwrap().remove(id).map(|_| ()).ok_or_else(|| AppError::not_found(id))
    }

    fn render(&self, id: &TemplateId, sample_data: &Value) -> Result<RenderOutcome, AppError> {
        let record = self.get(id)?;
        self.renders.lock().unwrap().push((id.clone(), sample_data.clone()));
        Ok(RenderOutcome {
            output: format!("rendered {} with {}", record.name, sample_data),
            error: None,
            render_time_seconds: Some(0.01),
        })
    }

    fn usage(&self) -> Result<UsageInfo, AppError> {
        self.usage.clone().ok_or_else(|| AppError::Transport("usage endpoint unreachable".into()))
    }
}
