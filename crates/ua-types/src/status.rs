// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Protocol result codes.
//!
//! A [`StatusCode`] is the 32-bit value every fallible operation of the stack
//! reports. The top two bits carry the severity class; the next 14 bits the
//! code itself; the low 16 bits are reserved for info flags and are ignored
//! by name lookup. The table below reproduces the namespace-zero code list
//! bit-for-bit.

use std::fmt;

/// Severity class encoded in the two most significant bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Good,
    Uncertain,
    Bad,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Good => "Good",
            Severity::Uncertain => "Uncertain",
            Severity::Bad => "Bad",
        };
        f.write_str(s)
    }
}

/// 32-bit protocol result code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct StatusCode(pub u32);

const SEVERITY_MASK: u32 = 0xC000_0000;
const CODE_MASK: u32 = 0xFFFF_0000;

macro_rules! status_codes {
    ($($ident:ident = $value:literal, $name:literal, $desc:literal;)+) => {
        impl StatusCode {
            $(
                #[doc = $desc]
                pub const $ident: StatusCode = StatusCode($value);
            )+
        }

        static STATUS_TABLE: &[(u32, &str, &str)] = &[
            $(($value, $name, $desc),)+
        ];
    };
}

status_codes! {
    GOOD = 0x00000000, "Good", "The operation succeeded.";
    BAD_UNEXPECTED_ERROR = 0x80010000, "BadUnexpectedError", "An unexpected error occurred.";
    BAD_INTERNAL_ERROR = 0x80020000, "BadInternalError",
        "An internal error occurred as a result of a programming or configuration error.";
    BAD_OUT_OF_MEMORY = 0x80030000, "BadOutOfMemory",
        "Not enough memory to complete the operation.";
    BAD_RESOURCE_UNAVAILABLE = 0x80040000, "BadResourceUnavailable",
        "An operating system resource is not available.";
    BAD_COMMUNICATION_ERROR = 0x80050000, "BadCommunicationError",
        "A low level communication error occurred.";
    BAD_ENCODING_ERROR = 0x80060000, "BadEncodingError",
        "Encoding halted because of invalid data in the objects being serialized.";
    BAD_DECODING_ERROR = 0x80070000, "BadDecodingError",
        "Decoding halted because of invalid data in the stream.";
    BAD_ENCODING_LIMITS_EXCEEDED = 0x80080000, "BadEncodingLimitsExceeded",
        "The message encoding/decoding limits imposed by the stack have been exceeded.";
    BAD_REQUEST_TOO_LARGE = 0x80B80000, "BadRequestTooLarge",
        "The request message size exceeds limits set by the server.";
    BAD_RESPONSE_TOO_LARGE = 0x80B90000, "BadResponseTooLarge",
        "The response message size exceeds limits set by the client.";
    BAD_UNKNOWN_RESPONSE = 0x80090000, "BadUnknownResponse",
        "An unrecognized response was received from the server.";
    BAD_TIMEOUT = 0x800A0000, "BadTimeout", "The operation timed out.";
    BAD_SERVICE_UNSUPPORTED = 0x800B0000, "BadServiceUnsupported",
        "The server does not support the requested service.";
    BAD_SHUTDOWN = 0x800C0000, "BadShutdown",
        "The operation was cancelled because the application is shutting down.";
    BAD_SERVER_NOT_CONNECTED = 0x800D0000, "BadServerNotConnected",
        "The operation could not complete because the client is not connected to the server.";
    BAD_SERVER_HALTED = 0x800E0000, "BadServerHalted",
        "The server has stopped and cannot process any requests.";
    BAD_NOTHING_TO_DO = 0x800F0000, "BadNothingToDo",
        "There was nothing to do because the client passed a list of operations with no elements.";
    BAD_TOO_MANY_OPERATIONS = 0x80100000, "BadTooManyOperations",
        "The request could not be processed because it specified too many operations.";
    BAD_TOO_MANY_MONITORED_ITEMS = 0x80DB0000, "BadTooManyMonitoredItems",
        "The request could not be processed because there are too many monitored items in the subscription.";
    BAD_DATA_TYPE_ID_UNKNOWN = 0x80110000, "BadDataTypeIdUnknown",
        "The extension object cannot be (de)serialized because the data type id is not recognized.";
    BAD_CERTIFICATE_INVALID = 0x80120000, "BadCertificateInvalid",
        "The certificate provided as a parameter is not valid.";
    BAD_SECURITY_CHECKS_FAILED = 0x80130000, "BadSecurityChecksFailed",
        "An error occurred verifying security.";
    BAD_CERTIFICATE_TIME_INVALID = 0x80140000, "BadCertificateTimeInvalid",
        "The Certificate has expired or is not yet valid.";
    BAD_CERTIFICATE_ISSUER_TIME_INVALID = 0x80150000, "BadCertificateIssuerTimeInvalid",
        "An Issuer Certificate has expired or is not yet valid.";
    BAD_CERTIFICATE_HOST_NAME_INVALID = 0x80160000, "BadCertificateHostNameInvalid",
        "The HostName used to connect to a Server does not match a HostName in the Certificate.";
    BAD_CERTIFICATE_URI_INVALID = 0x80170000, "BadCertificateUriInvalid",
        "The URI specified in the ApplicationDescription does not match the URI in the Certificate.";
    BAD_CERTIFICATE_USE_NOT_ALLOWED = 0x80180000, "BadCertificateUseNotAllowed",
        "The Certificate may not be used for the requested operation.";
    BAD_CERTIFICATE_ISSUER_USE_NOT_ALLOWED = 0x80190000, "BadCertificateIssuerUseNotAllowed",
        "The Issuer Certificate may not be used for the requested operation.";
    BAD_CERTIFICATE_UNTRUSTED = 0x801A0000, "BadCertificateUntrusted",
        "The Certificate is not trusted.";
    BAD_CERTIFICATE_REVOCATION_UNKNOWN = 0x801B0000, "BadCertificateRevocationUnknown",
        "It was not possible to determine if the Certificate has been revoked.";
    BAD_CERTIFICATE_ISSUER_REVOCATION_UNKNOWN = 0x801C0000, "BadCertificateIssuerRevocationUnknown",
        "It was not possible to determine if the Issuer Certificate has been revoked.";
    BAD_CERTIFICATE_REVOKED = 0x801D0000, "BadCertificateRevoked",
        "The Certificate has been revoked.";
    BAD_CERTIFICATE_ISSUER_REVOKED = 0x801E0000, "BadCertificateIssuerRevoked",
        "The Issuer Certificate has been revoked.";
    BAD_USER_ACCESS_DENIED = 0x801F0000, "BadUserAccessDenied",
        "User does not have permission to perform the requested operation.";
    BAD_IDENTITY_TOKEN_INVALID = 0x80200000, "BadIdentityTokenInvalid",
        "The user identity token is not valid.";
    BAD_IDENTITY_TOKEN_REJECTED = 0x80210000, "BadIdentityTokenRejected",
        "The user identity token is valid but the server has rejected it.";
    BAD_SECURE_CHANNEL_ID_INVALID = 0x80220000, "BadSecureChannelIdInvalid",
        "The specified secure channel is no longer valid.";
    BAD_INVALID_TIMESTAMP = 0x80230000, "BadInvalidTimestamp",
        "The timestamp is outside the range allowed by the server.";
    BAD_NONCE_INVALID = 0x80240000, "BadNonceInvalid",
        "The nonce does appear to be not a random value or it is not the correct length.";
    BAD_SESSION_ID_INVALID = 0x80250000, "BadSessionIdInvalid", "The session id is not valid.";
    BAD_SESSION_CLOSED = 0x80260000, "BadSessionClosed", "The session was closed by the client.";
    BAD_SESSION_NOT_ACTIVATED = 0x80270000, "BadSessionNotActivated",
        "The session cannot be used because ActivateSession has not been called.";
    BAD_SUBSCRIPTION_ID_INVALID = 0x80280000, "BadSubscriptionIdInvalid",
        "The subscription id is not valid.";
    BAD_REQUEST_HEADER_INVALID = 0x802A0000, "BadRequestHeaderInvalid",
        "The header for the request is missing or invalid.";
    BAD_TIMESTAMPS_TO_RETURN_INVALID = 0x802B0000, "BadTimestampsToReturnInvalid",
        "The timestamps to return parameter is invalid.";
    BAD_REQUEST_CANCELLED_BY_CLIENT = 0x802C0000, "BadRequestCancelledByClient",
        "The request was cancelled by the client.";
    GOOD_SUBSCRIPTION_TRANSFERRED = 0x002D0000, "GoodSubscriptionTransferred",
        "The subscription was transferred to another session.";
    GOOD_COMPLETES_ASYNCHRONOUSLY = 0x002E0000, "GoodCompletesAsynchronously",
        "The processing will complete asynchronously.";
    GOOD_OVERLOAD = 0x002F0000, "GoodOverload",
        "Sampling has slowed down due to resource limitations.";
    GOOD_CLAMPED = 0x00300000, "GoodClamped", "The value written was accepted but was clamped.";
    BAD_NO_COMMUNICATION = 0x80310000, "BadNoCommunication",
        "Communication with the data source is defined, but not established, and there is no last known value available.";
    BAD_WAITING_FOR_INITIAL_DATA = 0x80320000, "BadWaitingForInitialData",
        "Waiting for the server to obtain values from the underlying data source.";
    BAD_NODE_ID_INVALID = 0x80330000, "BadNodeIdInvalid", "The syntax of the node id is not valid.";
    BAD_NODE_ID_UNKNOWN = 0x80340000, "BadNodeIdUnknown",
        "The node id refers to a node that does not exist in the server address space.";
    BAD_ATTRIBUTE_ID_INVALID = 0x80350000, "BadAttributeIdInvalid",
        "The attribute is not supported for the specified Node.";
    BAD_INDEX_RANGE_INVALID = 0x80360000, "BadIndexRangeInvalid",
        "The syntax of the index range parameter is invalid.";
    BAD_INDEX_RANGE_NO_DATA = 0x80370000, "BadIndexRangeNoData",
        "No data exists within the range of indexes specified.";
    BAD_DATA_ENCODING_INVALID = 0x80380000, "BadDataEncodingInvalid",
        "The data encoding is invalid.";
    BAD_DATA_ENCODING_UNSUPPORTED = 0x80390000, "BadDataEncodingUnsupported",
        "The server does not support the requested data encoding for the node.";
    BAD_NOT_READABLE = 0x803A0000, "BadNotReadable",
        "The access level does not allow reading or subscribing to the Node.";
    BAD_NOT_WRITABLE = 0x803B0000, "BadNotWritable",
        "The access level does not allow writing to the Node.";
    BAD_OUT_OF_RANGE = 0x803C0000, "BadOutOfRange", "The value was out of range.";
    BAD_NOT_SUPPORTED = 0x803D0000, "BadNotSupported", "The requested operation is not supported.";
    BAD_NOT_FOUND = 0x803E0000, "BadNotFound",
        "A requested item was not found or a search operation ended without success.";
    BAD_OBJECT_DELETED = 0x803F0000, "BadObjectDeleted",
        "The object cannot be used because it has been deleted.";
    BAD_NOT_IMPLEMENTED = 0x80400000, "BadNotImplemented",
        "Requested operation is not implemented.";
    BAD_MONITORING_MODE_INVALID = 0x80410000, "BadMonitoringModeInvalid",
        "The monitoring mode is invalid.";
    BAD_MONITORED_ITEM_ID_INVALID = 0x80420000, "BadMonitoredItemIdInvalid",
        "The monitoring item id does not refer to a valid monitored item.";
    BAD_MONITORED_ITEM_FILTER_INVALID = 0x80430000, "BadMonitoredItemFilterInvalid",
        "The monitored item filter parameter is not valid.";
    BAD_MONITORED_ITEM_FILTER_UNSUPPORTED = 0x80440000, "BadMonitoredItemFilterUnsupported",
        "The server does not support the requested monitored item filter.";
    BAD_FILTER_NOT_ALLOWED = 0x80450000, "BadFilterNotAllowed",
        "A monitoring filter cannot be used in combination with the attribute specified.";
    BAD_STRUCTURE_MISSING = 0x80460000, "BadStructureMissing",
        "A mandatory structured parameter was missing or null.";
    BAD_EVENT_FILTER_INVALID = 0x80470000, "BadEventFilterInvalid",
        "The event filter is not valid.";
    BAD_CONTENT_FILTER_INVALID = 0x80480000, "BadContentFilterInvalid",
        "The content filter is not valid.";
    BAD_FILTER_OPERATOR_INVALID = 0x80C10000, "BadFilterOperatorInvalid",
        "An unregognized operator was provided in a filter.";
    BAD_FILTER_OPERATOR_UNSUPPORTED = 0x80C20000, "BadFilterOperatorUnsupported",
        "A valid operator was provided, but the server does not provide support for this filter operator.";
    BAD_FILTER_OPERAND_COUNT_MISMATCH = 0x80C30000, "BadFilterOperandCountMismatch",
        "The number of operands provided for the filter operator was less then expected for the operand provided.";
    BAD_FILTER_OPERAND_INVALID = 0x80490000, "BadFilterOperandInvalid",
        "The operand used in a content filter is not valid.";
    BAD_FILTER_ELEMENT_INVALID = 0x80C40000, "BadFilterElementInvalid",
        "The referenced element is not a valid element in the content filter.";
    BAD_FILTER_LITERAL_INVALID = 0x80C50000, "BadFilterLiteralInvalid",
        "The referenced literal is not a valid value.";
    BAD_CONTINUATION_POINT_INVALID = 0x804A0000, "BadContinuationPointInvalid",
        "The continuation point provide is longer valid.";
    BAD_NO_CONTINUATION_POINTS = 0x804B0000, "BadNoContinuationPoints",
        "The operation could not be processed because all continuation points have been allocated.";
    BAD_REFERENCE_TYPE_ID_INVALID = 0x804C0000, "BadReferenceTypeIdInvalid",
        "The operation could not be processed because all continuation points have been allocated.";
    BAD_BROWSE_DIRECTION_INVALID = 0x804D0000, "BadBrowseDirectionInvalid",
        "The browse direction is not valid.";
    BAD_NODE_NOT_IN_VIEW = 0x804E0000, "BadNodeNotInView", "The node is not part of the view.";
    BAD_SERVER_URI_INVALID = 0x804F0000, "BadServerUriInvalid", "The ServerUri is not a valid URI.";
    BAD_SERVER_NAME_MISSING = 0x80500000, "BadServerNameMissing", "No ServerName was specified.";
    BAD_DISCOVERY_URL_MISSING = 0x80510000, "BadDiscoveryUrlMissing",
        "No DiscoveryUrl was specified.";
    BAD_SEMPAHORE_FILE_MISSING = 0x80520000, "BadSempahoreFileMissing",
        "The semaphore file specified by the client is not valid.";
    BAD_REQUEST_TYPE_INVALID = 0x80530000, "BadRequestTypeInvalid",
        "The security token request type is not valid.";
    BAD_SECURITY_MODE_REJECTED = 0x80540000, "BadSecurityModeRejected",
        "The security mode does not meet the requirements set by the Server.";
    BAD_SECURITY_POLICY_REJECTED = 0x80550000, "BadSecurityPolicyRejected",
        "The security policy does not meet the requirements set by the Server.";
    BAD_TOO_MANY_SESSIONS = 0x80560000, "BadTooManySessions",
        "The server has reached its maximum number of sessions.";
    BAD_USER_SIGNATURE_INVALID = 0x80570000, "BadUserSignatureInvalid",
        "The user token signature is missing or invalid.";
    BAD_APPLICATION_SIGNATURE_INVALID = 0x80580000, "BadApplicationSignatureInvalid",
        "The signature generated with the client certificate is missing or invalid.";
    BAD_NO_VALID_CERTIFICATES = 0x80590000, "BadNoValidCertificates",
        "The client did not provide at least one software certificate that is valid and meets the profile requirements for the server.";
    BAD_IDENTITY_CHANGE_NOT_SUPPORTED = 0x80C60000, "BadIdentityChangeNotSupported",
        "The Server does not support changing the user identity assigned to the session.";
    BAD_REQUEST_CANCELLED_BY_REQUEST = 0x805A0000, "BadRequestCancelledByRequest",
        "The request was cancelled by the client with the Cancel service.";
    BAD_PARENT_NODE_ID_INVALID = 0x805B0000, "BadParentNodeIdInvalid",
        "The parent node id does not to refer to a valid node.";
    BAD_REFERENCE_NOT_ALLOWED = 0x805C0000, "BadReferenceNotAllowed",
        "The reference could not be created because it violates constraints imposed by the data model.";
    BAD_NODE_ID_REJECTED = 0x805D0000, "BadNodeIdRejected",
        "The requested node id was reject because it was either invalid or server does not allow node ids to be specified by the client.";
    BAD_NODE_ID_EXISTS = 0x805E0000, "BadNodeIdExists",
        "The requested node id is already used by another node.";
    BAD_NODE_CLASS_INVALID = 0x805F0000, "BadNodeClassInvalid", "The node class is not valid.";
    BAD_BROWSE_NAME_INVALID = 0x80600000, "BadBrowseNameInvalid", "The browse name is invalid.";
    BAD_BROWSE_NAME_DUPLICATED = 0x80610000, "BadBrowseNameDuplicated",
        "The browse name is not unique among nodes that share the same relationship with the parent.";
    BAD_NODE_ATTRIBUTES_INVALID = 0x80620000, "BadNodeAttributesInvalid",
        "The node attributes are not valid for the node class.";
    BAD_TYPE_DEFINITION_INVALID = 0x80630000, "BadTypeDefinitionInvalid",
        "The type definition node id does not reference an appropriate type node.";
    BAD_SOURCE_NODE_ID_INVALID = 0x80640000, "BadSourceNodeIdInvalid",
        "The source node id does not reference a valid node.";
    BAD_TARGET_NODE_ID_INVALID = 0x80650000, "BadTargetNodeIdInvalid",
        "The target node id does not reference a valid node.";
    BAD_DUPLICATE_REFERENCE_NOT_ALLOWED = 0x80660000, "BadDuplicateReferenceNotAllowed",
        "The reference type between the nodes is already defined.";
    BAD_INVALID_SELF_REFERENCE = 0x80670000, "BadInvalidSelfReference",
        "The server does not allow this type of self reference on this node.";
    BAD_REFERENCE_LOCAL_ONLY = 0x80680000, "BadReferenceLocalOnly",
        "The reference type is not valid for a reference to a remote server.";
    BAD_NO_DELETE_RIGHTS = 0x80690000, "BadNoDeleteRights",
        "The server will not allow the node to be deleted.";
    UNCERTAIN_REFERENCE_NOT_DELETED = 0x40BC0000, "UncertainReferenceNotDeleted",
        "The server was not able to delete all target references.";
    BAD_SERVER_INDEX_INVALID = 0x806A0000, "BadServerIndexInvalid",
        "The server index is not valid.";
    BAD_VIEW_ID_UNKNOWN = 0x806B0000, "BadViewIdUnknown",
        "The view id does not refer to a valid view node.";
    BAD_VIEW_TIMESTAMP_INVALID = 0x80C90000, "BadViewTimestampInvalid",
        "The view timestamp is not available or not supported.";
    BAD_VIEW_PARAMETER_MISMATCH = 0x80CA0000, "BadViewParameterMismatch",
        "The view parameters are not consistent with each other.";
    BAD_VIEW_VERSION_INVALID = 0x80CB0000, "BadViewVersionInvalid",
        "The view version is not available or not supported.";
    UNCERTAIN_NOT_ALL_NODES_AVAILABLE = 0x40C00000, "UncertainNotAllNodesAvailable",
        "The list of references may not be complete because the underlying system is not available.";
    GOOD_RESULTS_MAY_BE_INCOMPLETE = 0x00BA0000, "GoodResultsMayBeIncomplete",
        "The server should have followed a reference to a node in a remote server but did not. The result set may be incomplete.";
    BAD_NOT_TYPE_DEFINITION = 0x80C80000, "BadNotTypeDefinition",
        "The provided Nodeid was not a type definition nodeid.";
    UNCERTAIN_REFERENCE_OUT_OF_SERVER = 0x406C0000, "UncertainReferenceOutOfServer",
        "One of the references to follow in the relative path references to a node in the address space in another server.";
    BAD_TOO_MANY_MATCHES = 0x806D0000, "BadTooManyMatches",
        "The requested operation has too many matches to return.";
    BAD_QUERY_TOO_COMPLEX = 0x806E0000, "BadQueryTooComplex",
        "The requested operation requires too many resources in the server.";
    BAD_NO_MATCH = 0x806F0000, "BadNoMatch", "The requested operation has no match to return.";
    BAD_MAX_AGE_INVALID = 0x80700000, "BadMaxAgeInvalid", "The max age parameter is invalid.";
    BAD_HISTORY_OPERATION_INVALID = 0x80710000, "BadHistoryOperationInvalid",
        "The history details parameter is not valid.";
    BAD_HISTORY_OPERATION_UNSUPPORTED = 0x80720000, "BadHistoryOperationUnsupported",
        "The server does not support the requested operation.";
    BAD_INVALID_TIMESTAMP_ARGUMENT = 0x80BD0000, "BadInvalidTimestampArgument",
        "The defined timestamp to return was invalid.";
    BAD_WRITE_NOT_SUPPORTED = 0x80730000, "BadWriteNotSupported",
        "The server not does support writing the combination of value, status and timestamps provided.";
    BAD_TYPE_MISMATCH = 0x80740000, "BadTypeMismatch",
        "The value supplied for the attribute is not of the same type as the attribute's value.";
    BAD_METHOD_INVALID = 0x80750000, "BadMethodInvalid",
        "The method id does not refer to a method for the specified object.";
    BAD_ARGUMENTS_MISSING = 0x80760000, "BadArgumentsMissing",
        "The client did not specify all of the input arguments for the method.";
    BAD_TOO_MANY_SUBSCRIPTIONS = 0x80770000, "BadTooManySubscriptions",
        "The server has reached its  maximum number of subscriptions.";
    BAD_TOO_MANY_PUBLISH_REQUESTS = 0x80780000, "BadTooManyPublishRequests",
        "The server has reached the maximum number of queued publish requests.";
    BAD_NO_SUBSCRIPTION = 0x80790000, "BadNoSubscription",
        "There is no subscription available for this session.";
    BAD_SEQUENCE_NUMBER_UNKNOWN = 0x807A0000, "BadSequenceNumberUnknown",
        "The sequence number is unknown to the server.";
    BAD_MESSAGE_NOT_AVAILABLE = 0x807B0000, "BadMessageNotAvailable",
        "The requested notification message is no longer available.";
    BAD_INSUFFICIENT_CLIENT_PROFILE = 0x807C0000, "BadInsufficientClientProfile",
        "The Client of the current Session does not support one or more Profiles that are necessary for the Subscription.";
    BAD_STATE_NOT_ACTIVE = 0x80BF0000, "BadStateNotActive",
        "The sub-state machine is not currently active.";
    BAD_TCP_SERVER_TOO_BUSY = 0x807D0000, "BadTcpServerTooBusy",
        "The server cannot process the request because it is too busy.";
    BAD_TCP_MESSAGE_TYPE_INVALID = 0x807E0000, "BadTcpMessageTypeInvalid",
        "The type of the message specified in the header invalid.";
    BAD_TCP_SECURE_CHANNEL_UNKNOWN = 0x807F0000, "BadTcpSecureChannelUnknown",
        "The SecureChannelId and/or TokenId are not currently in use.";
    BAD_TCP_MESSAGE_TOO_LARGE = 0x80800000, "BadTcpMessageTooLarge",
        "The size of the message specified in the header is too large.";
    BAD_TCP_NOT_ENOUGH_RESOURCES = 0x80810000, "BadTcpNotEnoughResources",
        "There are not enough resources to process the request.";
    BAD_TCP_INTERNAL_ERROR = 0x80820000, "BadTcpInternalError", "An internal error occurred.";
    BAD_TCP_ENDPOINT_URL_INVALID = 0x80830000, "BadTcpEndpointUrlInvalid",
        "The Server does not recognize the QueryString specified.";
    BAD_REQUEST_INTERRUPTED = 0x80840000, "BadRequestInterrupted",
        "The request could not be sent because of a network interruption.";
    BAD_REQUEST_TIMEOUT = 0x80850000, "BadRequestTimeout",
        "Timeout occurred while processing the request.";
    BAD_SECURE_CHANNEL_CLOSED = 0x80860000, "BadSecureChannelClosed",
        "The secure channel has been closed.";
    BAD_SECURE_CHANNEL_TOKEN_UNKNOWN = 0x80870000, "BadSecureChannelTokenUnknown",
        "The token has expired or is not recognized.";
    BAD_SEQUENCE_NUMBER_INVALID = 0x80880000, "BadSequenceNumberInvalid",
        "The sequence number is not valid.";
    BAD_PROTOCOL_VERSION_UNSUPPORTED = 0x80BE0000, "BadProtocolVersionUnsupported",
        "The applications do not have compatible protocol versions.";
    BAD_CONFIGURATION_ERROR = 0x80890000, "BadConfigurationError",
        "There is a problem with the configuration that affects the usefulness of the value.";
    BAD_NOT_CONNECTED = 0x808A0000, "BadNotConnected",
        "The variable should receive its value from another variable, but has never been configured to do so.";
    BAD_DEVICE_FAILURE = 0x808B0000, "BadDeviceFailure",
        "There has been a failure in the device/data source that generates the value that has affected the value.";
    BAD_SENSOR_FAILURE = 0x808C0000, "BadSensorFailure",
        "There has been a failure in the sensor from which the value is derived by the device/data source.";
    BAD_OUT_OF_SERVICE = 0x808D0000, "BadOutOfService",
        "The source of the data is not operational.";
    BAD_DEADBAND_FILTER_INVALID = 0x808E0000, "BadDeadbandFilterInvalid",
        "The deadband filter is not valid.";
    UNCERTAIN_NO_COMMUNICATION_LAST_USABLE_VALUE = 0x408F0000, "UncertainNoCommunicationLastUsableValue",
        "Communication to the data source has failed. The variable value is the last value that had a good quality.";
    UNCERTAIN_LAST_USABLE_VALUE = 0x40900000, "UncertainLastUsableValue",
        "Whatever was updating this value has stopped doing so.";
    UNCERTAIN_SUBSTITUTE_VALUE = 0x40910000, "UncertainSubstituteValue",
        "The value is an operational value that was manually overwritten.";
    UNCERTAIN_INITIAL_VALUE = 0x40920000, "UncertainInitialValue",
        "The value is an initial value for a variable that normally receives its value from another variable.";
    UNCERTAIN_SENSOR_NOT_ACCURATE = 0x40930000, "UncertainSensorNotAccurate",
        "The value is at one of the sensor limits.";
    UNCERTAIN_ENGINEERING_UNITS_EXCEEDED = 0x40940000, "UncertainEngineeringUnitsExceeded",
        "The value is outside of the range of values defined for this parameter.";
    UNCERTAIN_SUBNORMAL = 0x40950000, "UncertainSubnormal",
        "The value is derived from multiple sources and has less than the required number of Good sources.";
    GOOD_LOCAL_OVERRIDE = 0x00960000, "GoodLocalOverride", "The value has been overridden.";
    BAD_REFRESH_IN_PROGRESS = 0x80970000, "BadRefreshInProgress",
        "This Condition refresh failed, a Condition refresh operation is already in progress.";
    BAD_CONDITION_ALREADY_DISABLED = 0x80980000, "BadConditionAlreadyDisabled",
        "This condition has already been disabled.";
    BAD_CONDITION_ALREADY_ENABLED = 0x80CC0000, "BadConditionAlreadyEnabled",
        "This condition has already been enabled.";
    BAD_CONDITION_DISABLED = 0x80990000, "BadConditionDisabled",
        "Property not available, this condition is disabled.";
    BAD_EVENT_ID_UNKNOWN = 0x809A0000, "BadEventIdUnknown",
        "The specified event id is not recognized.";
    BAD_EVENT_NOT_ACKNOWLEDGEABLE = 0x80BB0000, "BadEventNotAcknowledgeable",
        "The event cannot be acknowledged.";
    BAD_DIALOG_NOT_ACTIVE = 0x80CD0000, "BadDialogNotActive", "The dialog condition is not active.";
    BAD_DIALOG_RESPONSE_INVALID = 0x80CE0000, "BadDialogResponseInvalid",
        "The response is not valid for the dialog.";
    BAD_CONDITION_BRANCH_ALREADY_ACKED = 0x80CF0000, "BadConditionBranchAlreadyAcked",
        "The condition branch has already been acknowledged.";
    BAD_CONDITION_BRANCH_ALREADY_CONFIRMED = 0x80D00000, "BadConditionBranchAlreadyConfirmed",
        "The condition branch has already been confirmed.";
    BAD_CONDITION_ALREADY_SHELVED = 0x80D10000, "BadConditionAlreadyShelved",
        "The condition has already been shelved.";
    BAD_CONDITION_NOT_SHELVED = 0x80D20000, "BadConditionNotShelved",
        "The condition is not currently shelved.";
    BAD_SHELVING_TIMEOUT_OF_RANGE = 0x80D30000, "BadShelvingTimeoutOfRange",
        "The shelving time not within an acceptable range.";
    BAD_NO_DATA = 0x809B0000, "BadNoData",
        "No data exists for the requested time range or event filter.";
    BAD_BOUND_NOT_FOUND = 0x80D70000, "BadBoundNotFound",
        "No data found to provide upper or lower bound value.";
    BAD_BOUND_NOT_SUPPORTED = 0x80D80000, "BadBoundNotSupported",
        "The server cannot retrieve a bound for the variable.";
    BAD_DATA_LOST = 0x809D0000, "BadDataLost",
        "Data is missing due to collection started/stopped/lost.";
    BAD_DATA_UNAVAILABLE = 0x809E0000, "BadDataUnavailable",
        "Expected data is unavailable for the requested time range due to an un-mounted volume, an off-line archive or tape, or similar reason for temporary unavailability.";
    BAD_ENTRY_EXISTS = 0x809F0000, "BadEntryExists",
        "The data or event was not successfully inserted because a matching entry exists.";
    BAD_NO_ENTRY_EXISTS = 0x80A00000, "BadNoEntryExists",
        "The data or event was not successfully updated because no matching entry exists.";
    BAD_TIMESTAMP_NOT_SUPPORTED = 0x80A10000, "BadTimestampNotSupported",
        "The client requested history using a timestamp format the server does not support (i.e requested ServerTimestamp when server only supports SourceTimestamp).";
    GOOD_ENTRY_INSERTED = 0x00A20000, "GoodEntryInserted",
        "The data or event was successfully inserted into the historical database.";
    GOOD_ENTRY_REPLACED = 0x00A30000, "GoodEntryReplaced",
        "The data or event field was successfully replaced in the historical database.";
    UNCERTAIN_DATA_SUBNORMAL = 0x40A40000, "UncertainDataSubnormal",
        "The value is derived from multiple values and has less than the required number of Good values.";
    GOOD_NO_DATA = 0x00A50000, "GoodNoData",
        "No data exists for the requested time range or event filter.";
    GOOD_MORE_DATA = 0x00A60000, "GoodMoreData",
        "The data or event field was successfully replaced in the historical database.";
    BAD_AGGREGATE_LIST_MISMATCH = 0x80D40000, "BadAggregateListMismatch",
        "The requested number of Aggregates does not match the requested number of NodeIds.";
    BAD_AGGREGATE_NOT_SUPPORTED = 0x80D50000, "BadAggregateNotSupported",
        "The requested Aggregate is not support by the server.";
    BAD_AGGREGATE_INVALID_INPUTS = 0x80D60000, "BadAggregateInvalidInputs",
        "The aggregate value could not be derived due to invalid data inputs.";
    BAD_AGGREGATE_CONFIGURATION_REJECTED = 0x80DA0000, "BadAggregateConfigurationRejected",
        "The aggregate configuration is not valid for specified node.";
    GOOD_DATA_IGNORED = 0x00D90000, "GoodDataIgnored",
        "The request pecifies fields which are not valid for the EventType or cannot be saved by the historian.";
    GOOD_COMMUNICATION_EVENT = 0x00A70000, "GoodCommunicationEvent",
        "The communication layer has raised an event.";
    GOOD_SHUTDOWN_EVENT = 0x00A80000, "GoodShutdownEvent", "The system is shutting down.";
    GOOD_CALL_AGAIN = 0x00A90000, "GoodCallAgain",
        "The operation is not finished and needs to be called again.";
    GOOD_NONCRITICAL_TIMEOUT = 0x00AA0000, "GoodNoncriticalTimeout",
        "A non-critical timeout occurred.";
    BAD_INVALID_ARGUMENT = 0x80AB0000, "BadInvalidArgument", "One or more arguments are invalid.";
    BAD_CONNECTION_REJECTED = 0x80AC0000, "BadConnectionRejected",
        "Could not establish a network connection to remote server.";
    BAD_DISCONNECT = 0x80AD0000, "BadDisconnect", "The server has disconnected from the client.";
    BAD_CONNECTION_CLOSED = 0x80AE0000, "BadConnectionClosed",
        "The network connection has been closed.";
    BAD_INVALID_STATE = 0x80AF0000, "BadInvalidState",
        "The operation cannot be completed because the object is closed, uninitialized or in some other invalid state.";
    BAD_END_OF_STREAM = 0x80B00000, "BadEndOfStream", "Cannot move beyond end of the stream.";
    BAD_NO_DATA_AVAILABLE = 0x80B10000, "BadNoDataAvailable",
        "No data is currently available for reading from a non-blocking stream.";
    BAD_WAITING_FOR_RESPONSE = 0x80B20000, "BadWaitingForResponse",
        "The asynchronous operation is waiting for a response.";
    BAD_OPERATION_ABANDONED = 0x80B30000, "BadOperationAbandoned",
        "The asynchronous operation was abandoned by the caller.";
    BAD_EXPECTED_STREAM_TO_BLOCK = 0x80B40000, "BadExpectedStreamToBlock",
        "The stream did not return all data requested (possibly because it is a non-blocking stream).";
    BAD_WOULD_BLOCK = 0x80B50000, "BadWouldBlock",
        "Non blocking behaviour is required and the operation would block.";
    BAD_SYNTAX_ERROR = 0x80B60000, "BadSyntaxError", "A value had an invalid syntax.";
    BAD_MAX_CONNECTIONS_REACHED = 0x80B70000, "BadMaxConnectionsReached",
        "The operation could not be finished because all available connections are in use.";
}

impl StatusCode {
    /// Wrap a raw wire value.
    pub const fn from_u32(value: u32) -> Self {
        StatusCode(value)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn severity(self) -> Severity {
        match self.0 & SEVERITY_MASK {
            0 => Severity::Good,
            0x4000_0000 => Severity::Uncertain,
            _ => Severity::Bad,
        }
    }

    pub const fn is_good(self) -> bool {
        matches!(self.severity(), Severity::Good)
    }

    pub const fn is_uncertain(self) -> bool {
        matches!(self.severity(), Severity::Uncertain)
    }

    pub const fn is_bad(self) -> bool {
        matches!(self.severity(), Severity::Bad)
    }

    fn entry(self) -> Option<&'static (u32, &'static str, &'static str)> {
        let code = self.0 & CODE_MASK;
        STATUS_TABLE.iter().find(|(value, _, _)| *value == code)
    }

    /// Symbolic name, e.g. `"BadOutOfMemory"`. `None` for codes outside the table.
    pub fn name(self) -> Option<&'static str> {
        self.entry().map(|(_, name, _)| *name)
    }

    pub fn description(self) -> Option<&'static str> {
        self.entry().map(|(_, _, desc)| *desc)
    }

    /// Reverse lookup by symbolic name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        STATUS_TABLE
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(value, _, _)| StatusCode(*value))
    }

    /// Every named code, in table order.
    pub fn all() -> impl Iterator<Item = StatusCode> {
        STATUS_TABLE.iter().map(|(value, _, _)| StatusCode(*value))
    }
}

impl From<u32> for StatusCode {
    fn from(value: u32) -> Self {
        StatusCode(value)
    }
}

impl From<StatusCode> for u32 {
    fn from(code: StatusCode) -> Self {
        code.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "0x{:08X}", self.0),
        }
    }
}

impl fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatusCode({} 0x{:08X})", self, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_classes() {
        assert_eq!(StatusCode::GOOD.severity(), Severity::Good);
        assert!(StatusCode::GOOD_CLAMPED.is_good());
        assert!(StatusCode::UNCERTAIN_INITIAL_VALUE.is_uncertain());
        assert!(StatusCode::BAD_OUT_OF_MEMORY.is_bad());
        assert!(!StatusCode::BAD_OUT_OF_MEMORY.is_good());
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(StatusCode::BAD_UNEXPECTED_ERROR.bits(), 0x8001_0000);
        assert_eq!(StatusCode::BAD_INTERNAL_ERROR.bits(), 0x8002_0000);
        assert_eq!(StatusCode::BAD_OUT_OF_MEMORY.bits(), 0x8003_0000);
        assert_eq!(StatusCode::BAD_ENCODING_ERROR.bits(), 0x8006_0000);
        assert_eq!(StatusCode::BAD_INVALID_ARGUMENT.bits(), 0x80AB_0000);
        assert_eq!(StatusCode::BAD_MAX_CONNECTIONS_REACHED.bits(), 0x80B7_0000);
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(StatusCode::BAD_OUT_OF_MEMORY.name(), Some("BadOutOfMemory"));
        assert_eq!(
            StatusCode::from_name("BadDataTypeIdUnknown"),
            Some(StatusCode::BAD_DATA_TYPE_ID_UNKNOWN)
        );
        assert_eq!(StatusCode::from_name("NoSuchCode"), None);
        assert_eq!(StatusCode(0x8123_0000).name(), None);
    }

    #[test]
    fn test_info_bits_ignored_by_lookup() {
        let code = StatusCode(StatusCode::BAD_TIMEOUT.bits() | 0x0400);
        assert_eq!(code.name(), Some("BadTimeout"));
        assert_ne!(code, StatusCode::BAD_TIMEOUT);
    }

    #[test]
    fn test_table_has_unique_values() {
        let mut values: Vec<u32> = StatusCode::all().map(StatusCode::bits).collect();
        let total = values.len();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), total);
        assert!(total > 200);
    }

    #[test]
    fn test_display() {
        assert_eq!(StatusCode::GOOD.to_string(), "Good");
        assert_eq!(StatusCode(0x8123_0000).to_string(), "0x81230000");
    }
}
