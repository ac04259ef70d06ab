use ferrous_proxy_application::ports::ResponseFactory;
use ferrous_proxy_infrastructure::dns::{HickoryResponseFactory, MessageBuilder};
use hickory_proto::op::{MessageType, ResponseCode};
use hickory_proto::rr::RecordType;

#[test]
fn test_servfail_echoes_query() {
    let query = MessageBuilder::build_query_with_id(42, "example.com.", RecordType::A).unwrap();

    let response = HickoryResponseFactory.servfail(&query);

    assert_eq!(response.id(), 42);
    assert_eq!(response.message_type(), MessageType::Response);
    assert_eq!(response.response_code(), ResponseCode::ServFail);
    assert_eq!(response.queries(), query.queries());
    assert!(response.recursion_desired());
    assert!(response.recursion_available());
    assert!(response.answers().is_empty());
}

#[test]
fn test_reply_codes() {
    let query = MessageBuilder::build_query_with_id(7, "example.org.", RecordType::MX).unwrap();

    assert_eq!(
        HickoryResponseFactory.nxdomain(&query).response_code(),
        ResponseCode::NXDomain
    );
    assert_eq!(
        HickoryResponseFactory.refused(&query).response_code(),
        ResponseCode::Refused
    );
    assert_eq!(
        HickoryResponseFactory
            .reply(&query, ResponseCode::NotImp)
            .response_code(),
        ResponseCode::NotImp
    );
}

#[test]
fn test_reply_serializes() {
    let query =
        MessageBuilder::build_query_with_id(0xBEEF, "example.net.", RecordType::A).unwrap();
    let response = HickoryResponseFactory.nxdomain(&query);

    let bytes = MessageBuilder::serialize(&response).unwrap();

    assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), 0xBEEF);
    assert_eq!(bytes[2] & 0x80, 0x80, "QR flag should be set");
    assert_eq!(bytes[3] & 0x0F, 3, "RCODE should be NXDOMAIN");
}
