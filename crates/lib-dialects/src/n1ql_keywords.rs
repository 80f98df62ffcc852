//! Keyword tables for Couchbase N1QL, one phrase per line.

pub(crate) const N1QL_RESERVED_TOP_LEVEL_KEYWORDS: &str = "DELETE FROM
EXCEPT ALL
EXCEPT
EXPLAIN DELETE FROM
EXPLAIN UPDATE
EXPLAIN UPSERT
FROM
GROUP BY
HAVING
INFER
INSERT INTO
LET
LIMIT
MERGE INTO
NEST
ORDER BY
PREPARE
RETURNING
SELECT
SET CURRENT SCHEMA
SET SCHEMA
SET
UNNEST
UPDATE
UPSERT INTO
USE KEYS
VALUES
WHERE
";

pub(crate) const N1QL_RESERVED_NEWLINE_KEYWORDS: &str = "AND
CROSS JOIN
ELSE
INNER JOIN
JOIN
LEFT JOIN
LEFT OUTER JOIN
OR
RIGHT JOIN
RIGHT OUTER JOIN
WHEN
XOR
";

pub(crate) const N1QL_RESERVED_KEYWORDS: &str = "ALL
ANY
ARRAY
AS
ASC
BETWEEN
BINARY
BOOLEAN
BREAK
BUCKET
BUILD
BY
CALL
CAST
CLUSTER
COLLATE
COLLECTION
COMMIT
CONNECT
CONTINUE
CORRELATE
COVER
CREATE
DATABASE
DATASET
DATASTORE
DECLARE
DECREMENT
DERIVED
DESC
DESCRIBE
DISTINCT
DO
DROP
EACH
ELEMENT
EVERY
EXCLUDE
EXECUTE
EXISTS
FETCH
FIRST
FLATTEN
FOR
FORCE
FUNCTION
GRANT
GROUP
GSI
IF
IGNORE
ILIKE
IN
INCLUDE
INCREMENT
INDEX
INLINE
INNER
INTO
IS
KEY
KEYS
KEYSPACE
KNOWN
LAST
LIKE
MAP
MAPPING
MATCHED
MATERIALIZED
MISSING
NAMESPACE
NOT
NULL
NUMBER
OBJECT
OFFSET
ON
OPTION
ORDER
OUTER
OVER
PARSE
PARTITION
PASSWORD
PATH
POOL
PRIMARY
PRIVATE
PRIVILEGE
PROCEDURE
PUBLIC
REALM
REDUCE
RENAME
ROLE
SATISFIES
SCHEMA
SELF
SEMI
SHOW
SOME
START
STATISTICS
STRING
THEN
TO
TRANSACTION
TRIGGER
TRUNCATE
UNDER
UNIQUE
UNKNOWN
UNSET
USE
USER
USING
VALIDATE
VALUE
VALUED
VIA
VIEW
WITHIN
WITH
WORK
";
