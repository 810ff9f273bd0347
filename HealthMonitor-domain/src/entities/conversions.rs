use health_monitor_data::models::{health_metrics as data_metrics, patient as data_patient, prescription as data_prescription};

use crate::entities::health_metrics::{HealthMetricSample, HealthMetrics, RecordHealthMetricsRequest};
use crate::entities::patient::{Patient, RegisterPatientRequest};
use crate::entities::prescription::{Prescription, SavePrescriptionRequest};

// Conversion functions between domain entities and data models
// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert from data model to domain entity for a patient
pub fn convert_to_domain_patient(data_patient: data_patient::Patient) -> Patient {
    Patient {
        pat_id: data_patient.pat_id,
        name: data_patient.name,
        age: data_patient.age,
        gender: data_patient.gender,
        mobile: data_patient.mobile,
    }
}

/// Convert from domain entity to data model for a registration
pub fn convert_to_data_create_patient(domain_request: &RegisterPatientRequest)
    -> data_patient::CreatePatientRequest
{
    data_patient::CreatePatientRequest {
        name: domain_request.name.clone(),
        age: domain_request.age,
        gender: domain_request.gender.clone(),
        mobile: domain_request.mobile.clone(),
    }
}

/// Convert from data model to domain entity for a prescription
pub fn convert_to_domain_prescription(data_prescription: data_prescription::Prescription) -> Prescription {
    Prescription {
        id: data_prescription.id,
        pat_id: data_prescription.pat_id,
        prescription: data_prescription.prescription,
        timestamp: data_prescription.timestamp,
    }
}

/// Convert from domain entity to data model for a prescription save
pub fn convert_to_data_create_prescription(domain_request: &SavePrescriptionRequest)
    -> data_prescription::CreatePrescriptionRequest
{
    data_prescription::CreatePrescriptionRequest {
        pat_id: domain_request.pat_id,
        prescription: domain_request.prescription.clone(),
    }
}

/// Convert from data model to domain entity for a health metrics sample
pub fn convert_to_domain_sample(data_sample: data_metrics::HealthMetricSample) -> HealthMetricSample {
    HealthMetricSample {
        id: data_sample.id,
        pat_id: data_sample.pat_id,
        metrics: HealthMetrics {
            bpm: data_sample.bpm,
            spo2: data_sample.spo2,
            temperature: data_sample.temperature,
            humidity: data_sample.humidity,
            ppg: data_sample.ppg,
        },
        timestamp: data_sample.timestamp,
    }
}

/// Convert from domain entity to data model for a health metrics sample
pub fn convert_to_data_create_sample(domain_request: &RecordHealthMetricsRequest)
    -> data_metrics::CreateHealthMetricSampleRequest
{
    let metrics = domain_request.metrics;
    data_metrics::CreateHealthMetricSampleRequest {
        pat_id: domain_request.pat_id,
        bpm: metrics.bpm,
        spo2: metrics.spo2,
        temperature: metrics.temperature,
        humidity: metrics.humidity,
        ppg: metrics.ppg,
    }
}
